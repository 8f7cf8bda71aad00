use super::read_data_file;
use crate::error::{RaterError, Result};
use crate::types::scale::{AxisRange, Grade, ScaleDefinition};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct RawScale {
    #[serde(default, alias = "qualitative_numeric", alias = "qualitativeToNumeric")]
    qualitative_to_numeric: BTreeMap<String, f64>,
    #[serde(
        default,
        alias = "quantitative_numeric_ranges",
        alias = "quantitativeAxisRanges"
    )]
    quantitative_axis_ranges: Option<BTreeMap<String, AxisRange>>,
}

pub fn load_scale(path: &Path) -> Result<ScaleDefinition> {
    let content = read_data_file(path)?;
    parse_scale(&content)
        .map_err(|err| RaterError::DataFormat(format!("{}: {}", path.display(), err)))
}

/// Keys that are not canonical grade tokens are skipped with a warning.
pub fn parse_scale(content: &str) -> Result<ScaleDefinition> {
    let raw: RawScale = serde_json::from_str(content)?;
    Ok(ScaleDefinition {
        qualitative_to_numeric: canonical_keys("qualitative", raw.qualitative_to_numeric),
        quantitative_axis_ranges: raw
            .quantitative_axis_ranges
            .map(|ranges| canonical_keys("quantitative", ranges)),
    })
}

fn canonical_keys<V>(table: &str, entries: BTreeMap<String, V>) -> BTreeMap<Grade, V> {
    entries
        .into_iter()
        .filter_map(|(key, value)| match Grade::parse(&key) {
            Some(grade) => Some((grade, value)),
            None => {
                warn!(table, key = %key, "skipping non-canonical grade in scale definition");
                None
            }
        })
        .collect()
}
