use crate::error::ScoreError;
use crate::scoring::axis::AxisTransform;
use crate::types::scale::{AxisRanges, Grade, ScaleDefinition};
use crate::types::scorecard::FactorKind;
use crate::types::scoring::{RawValue, Score};
use tracing::debug;

/// Converts one leaf's raw input into an axis score.
pub fn convert(
    id: &str,
    kind: FactorKind,
    raw: &RawValue,
    to_axis: Option<&dyn AxisTransform>,
    scale: &ScaleDefinition,
    ranges: &AxisRanges,
) -> Result<Score, ScoreError> {
    match kind {
        FactorKind::Qualitative => qualitative_to_numeric(id, raw, scale),
        FactorKind::Numeric => {
            let value = numeric_value(id, raw)?;
            let axis_value = match to_axis {
                Some(transform) => transform.to_axis(value),
                None => value,
            };
            if axis_value.is_nan() {
                return Err(ScoreError::InvalidNumber {
                    id: id.to_string(),
                    raw: raw.to_string(),
                });
            }
            Ok(project_onto_axis(axis_value, ranges))
        }
    }
}

pub fn qualitative_to_numeric(
    id: &str,
    raw: &RawValue,
    scale: &ScaleDefinition,
) -> Result<Score, ScoreError> {
    let token = raw.to_string();
    Grade::parse(&token)
        .and_then(|grade| scale.qualitative_value(grade))
        .ok_or_else(|| ScoreError::UnknownGrade {
            id: id.to_string(),
            token: token.trim().to_string(),
        })
}

fn numeric_value(id: &str, raw: &RawValue) -> Result<f64, ScoreError> {
    let parsed = match raw {
        RawValue::Number(value) => Some(*value),
        RawValue::Text(text) => text.trim().parse::<f64>().ok(),
    };
    parsed
        .filter(|value| !value.is_nan())
        .ok_or_else(|| ScoreError::InvalidNumber {
            id: id.to_string(),
            raw: raw.to_string(),
        })
}

/// Re-projects an axis value into its quantitative bucket; values outside every
/// bucket clamp to the ends of the axis.
pub fn project_onto_axis(value: f64, ranges: &AxisRanges) -> Score {
    match ranges.bucket(value) {
        Some((grade, range)) => {
            let projected = range.interpolate(value);
            debug!(value, %grade, projected, "axis bucket matched");
            projected
        }
        None => value.clamp(ranges.min(), ranges.max()),
    }
}
