pub mod bands;
pub mod industries;
pub mod scale;
pub mod values;

use crate::error::{RaterError, ScoreError};
use crate::scoring;
use crate::types::band::BandTable;
use crate::types::scale::ScaleDefinition;
use crate::types::scorecard::IndustryRegistry;
use crate::types::scoring::{ScoreResult, ValueSet};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub industries: PathBuf,
    pub factor_scale: PathBuf,
    pub aggregate_bins: PathBuf,
}

impl DataPaths {
    pub fn in_dir(dir: &Path) -> Self {
        use crate::types::config::{
            DEFAULT_AGGREGATE_BINS_FILE, DEFAULT_FACTOR_SCALE_FILE, DEFAULT_INDUSTRIES_FILE,
        };
        Self {
            industries: dir.join(DEFAULT_INDUSTRIES_FILE),
            factor_scale: dir.join(DEFAULT_FACTOR_SCALE_FILE),
            aggregate_bins: dir.join(DEFAULT_AGGREGATE_BINS_FILE),
        }
    }
}

/// Immutable copies of the three data sources, loaded together once.
#[derive(Debug, Clone)]
pub struct DataSnapshot {
    pub registry: IndustryRegistry,
    pub scale: ScaleDefinition,
    pub bands: BandTable,
    /// SHA-256 over the three files' bytes, in load order.
    pub fingerprint: String,
}

impl DataSnapshot {
    pub fn load(paths: &DataPaths) -> Result<Self, RaterError> {
        let registry = industries::load_industries(&paths.industries)?;
        let scale = scale::load_scale(&paths.factor_scale)?;
        let bands = bands::load_bands(&paths.aggregate_bins)?;
        let fingerprint = fingerprint(paths)?;
        info!(
            industries = registry.len(),
            qualitative_grades = scale.qualitative_to_numeric.len(),
            bands = bands.bands().len(),
            %fingerprint,
            "data snapshot loaded"
        );
        Ok(Self {
            registry,
            scale,
            bands,
            fingerprint,
        })
    }

    pub fn score(&self, industry_key: &str, values: &ValueSet) -> Result<ScoreResult, ScoreError> {
        scoring::score(
            industry_key,
            values,
            &self.registry,
            &self.scale,
            &self.bands,
        )
    }
}

pub fn fingerprint(paths: &DataPaths) -> Result<String, RaterError> {
    let mut hasher = Sha256::new();
    for path in [&paths.industries, &paths.factor_scale, &paths.aggregate_bins] {
        hasher.update(read_data_file(path)?.as_bytes());
    }
    Ok(format!("{:x}", hasher.finalize()))
}

pub(crate) fn read_data_file(path: &Path) -> Result<String, RaterError> {
    std::fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => RaterError::DataNotFound(path.display().to_string()),
        _ => RaterError::Io(err),
    })
}
