use crate::error::{RaterError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateBand {
    pub lower: f64,
    pub upper: f64,
    pub label: String,
}

impl AggregateBand {
    pub fn new(lower: f64, upper: f64, label: impl Into<String>) -> Self {
        Self {
            lower,
            upper,
            label: label.into(),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Non-empty band list, ordered ascending by `lower` by whoever builds it.
#[derive(Debug, Clone, PartialEq)]
pub struct BandTable {
    bands: Vec<AggregateBand>,
}

impl BandTable {
    pub fn new(bands: Vec<AggregateBand>) -> Result<Self> {
        if bands.is_empty() {
            return Err(RaterError::DataFormat(
                "aggregate band table must contain at least one band".to_string(),
            ));
        }
        Ok(Self { bands })
    }

    pub fn bands(&self) -> &[AggregateBand] {
        &self.bands
    }

    pub fn first(&self) -> &AggregateBand {
        &self.bands[0]
    }

    pub fn last(&self) -> &AggregateBand {
        &self.bands[self.bands.len() - 1]
    }
}
