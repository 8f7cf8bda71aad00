use crate::error::{RaterError, Result};
use serde::Deserialize;
use std::sync::Arc;

/// Maps a raw metric (a ratio, a margin, a dollar amount) onto the rating axis.
pub trait AxisTransform: Send + Sync {
    fn to_axis(&self, raw: f64) -> f64;
}

impl<F> AxisTransform for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn to_axis(&self, raw: f64) -> f64 {
        self(raw)
    }
}

/// `axis = slope * raw + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearAxis {
    pub slope: f64,
    pub intercept: f64,
}

impl AxisTransform for LinearAxis {
    fn to_axis(&self, raw: f64) -> f64 {
        self.slope * raw + self.intercept
    }
}

/// Piecewise-linear curve through `(raw, axis)` knots sorted by `raw`.
/// Inputs beyond either end take the end knot's axis value.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseAxis {
    knots: Vec<(f64, f64)>,
}

impl PiecewiseAxis {
    pub fn new(mut knots: Vec<(f64, f64)>) -> Result<Self> {
        if knots.len() < 2 {
            return Err(RaterError::DataFormat(
                "piecewise to_axis needs at least two points".to_string(),
            ));
        }
        if knots
            .iter()
            .any(|(raw, axis)| !raw.is_finite() || !axis.is_finite())
        {
            return Err(RaterError::DataFormat(
                "piecewise to_axis points must be finite".to_string(),
            ));
        }
        knots.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(Self { knots })
    }
}

impl AxisTransform for PiecewiseAxis {
    fn to_axis(&self, raw: f64) -> f64 {
        let (first_raw, first_axis) = self.knots[0];
        if raw <= first_raw {
            return first_axis;
        }
        for pair in self.knots.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            if raw <= x1 {
                if x1 == x0 {
                    return y1;
                }
                return y0 + (raw - x0) / (x1 - x0) * (y1 - y0);
            }
        }
        self.knots[self.knots.len() - 1].1
    }
}

/// Declarative form of a transform, as written in value-set files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AxisSpec {
    Linear { slope: f64, intercept: f64 },
    Piecewise { points: Vec<[f64; 2]> },
}

impl AxisSpec {
    pub fn build(&self) -> Result<Arc<dyn AxisTransform>> {
        match self {
            AxisSpec::Linear { slope, intercept } => Ok(Arc::new(LinearAxis {
                slope: *slope,
                intercept: *intercept,
            })),
            AxisSpec::Piecewise { points } => {
                let knots = points.iter().map(|[raw, axis]| (*raw, *axis)).collect();
                Ok(Arc::new(PiecewiseAxis::new(knots)?))
            }
        }
    }
}
