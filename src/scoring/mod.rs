pub mod axis;
pub mod bands;
pub mod convert;

use crate::error::ScoreError;
use crate::types::band::BandTable;
use crate::types::scale::ScaleDefinition;
use crate::types::scorecard::IndustryRegistry;
use crate::types::scoring::{ScoreResult, ScoreRow, ValueSet};
use tracing::debug;

pub const AGGREGATE_PRECISION: i32 = 3;

/// Scores one industry's scorecard against the caller's values.
///
/// Every leaf of the factor tree is converted to an axis score and weighted by
/// `weight / 100`, whatever its depth. Group weights never enter the sum. The
/// rating label is looked up from the unrounded aggregate; the reported
/// aggregate is rounded to [`AGGREGATE_PRECISION`] digits.
///
/// Pure over its borrowed inputs: no I/O and no shared state, so snapshots may
/// be shared across threads.
pub fn score(
    industry_key: &str,
    values: &ValueSet,
    registry: &IndustryRegistry,
    scale: &ScaleDefinition,
    bands: &BandTable,
) -> Result<ScoreResult, ScoreError> {
    let industry = registry
        .get(industry_key)
        .ok_or_else(|| ScoreError::UnknownIndustry {
            key: industry_key.to_string(),
        })?;
    let ranges = scale.axis_ranges()?;

    let mut breakdown = Vec::new();
    let mut aggregate = 0.0;
    for leaf in industry.leaves() {
        let input = values.get(&leaf.id);
        let raw = input
            .and_then(|input| input.raw.as_ref())
            .ok_or_else(|| ScoreError::MissingValue {
                id: leaf.id.clone(),
            })?;
        let kind = input.and_then(|input| input.kind).unwrap_or(leaf.kind);
        let to_axis = input.and_then(|input| input.to_axis.as_deref());

        let leaf_score = convert::convert(&leaf.id, kind, raw, to_axis, scale, &ranges)?;
        aggregate += leaf_score * (leaf.weight / 100.0);
        debug!(id = %leaf.id, %kind, weight = leaf.weight, score = leaf_score, "leaf scored");

        breakdown.push(ScoreRow {
            id: leaf.id.clone(),
            weight: leaf.weight,
            raw: raw.clone(),
            score: leaf_score,
        });
    }

    let final_rating = bands::map_aggregate(aggregate, bands).to_string();
    Ok(ScoreResult {
        breakdown,
        aggregate_numeric: round_to(aggregate, AGGREGATE_PRECISION),
        final_rating,
    })
}

fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}
