use crate::scoring::axis::AxisTransform;
use crate::types::scorecard::FactorKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub type Score = f64;

/// Caller-supplied value as it arrived, before conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(value) => write!(f, "{value}"),
            RawValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

#[derive(Clone, Default)]
pub struct ValueInput {
    pub kind: Option<FactorKind>,
    pub raw: Option<RawValue>,
    pub to_axis: Option<Arc<dyn AxisTransform>>,
}

impl ValueInput {
    pub fn numeric(value: f64) -> Self {
        Self {
            kind: Some(FactorKind::Numeric),
            raw: Some(RawValue::Number(value)),
            to_axis: None,
        }
    }

    pub fn qualitative(token: &str) -> Self {
        Self {
            kind: Some(FactorKind::Qualitative),
            raw: Some(RawValue::from(token)),
            to_axis: None,
        }
    }

    /// Value whose type falls back to the factor's declared type.
    pub fn declared(raw: impl Into<RawValue>) -> Self {
        Self {
            kind: None,
            raw: Some(raw.into()),
            to_axis: None,
        }
    }

    pub fn with_transform(mut self, transform: impl AxisTransform + 'static) -> Self {
        self.to_axis = Some(Arc::new(transform));
        self
    }
}

impl fmt::Debug for ValueInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueInput")
            .field("kind", &self.kind)
            .field("raw", &self.raw)
            .field("to_axis", &self.to_axis.as_ref().map(|_| "<transform>"))
            .finish()
    }
}

pub type ValueSet = HashMap<String, ValueInput>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    pub id: String,
    pub weight: f64,
    pub raw: RawValue,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub breakdown: Vec<ScoreRow>,
    pub aggregate_numeric: Score,
    pub final_rating: String,
}
