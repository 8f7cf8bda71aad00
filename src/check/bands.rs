use super::EPSILON;
use crate::types::band::BandTable;
use crate::types::report::Finding;
use crate::types::scale::AxisRanges;

/// Contiguity of the (already sorted) band table, plus coverage of the axis span
/// when the quantitative ranges are known.
pub fn band_findings(bands: &BandTable, axis: Option<&AxisRanges>) -> Vec<Finding> {
    let mut findings = Vec::new();

    for pair in bands.bands().windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let delta = next.lower - prev.upper;
        if delta > EPSILON {
            findings.push(Finding::warning(
                "bands.gap",
                "Gap between aggregate bands",
                format!(
                    "Nothing maps ({}, {}) between '{}' and '{}'; values there fall to '{}'.",
                    prev.upper,
                    next.lower,
                    prev.label,
                    next.label,
                    bands.last().label
                ),
                Some(next.label.clone()),
            ));
        } else if delta < -EPSILON {
            findings.push(Finding::warning(
                "bands.overlap",
                "Overlapping aggregate bands",
                format!(
                    "'{}' and '{}' overlap on [{}, {}]; the lower band wins.",
                    prev.label, next.label, next.lower, prev.upper
                ),
                Some(next.label.clone()),
            ));
        }
    }

    if let Some(axis) = axis {
        let lowest = bands.first().lower;
        let highest = bands
            .bands()
            .iter()
            .map(|band| band.upper)
            .fold(f64::NEG_INFINITY, f64::max);
        if lowest - axis.min() > EPSILON || axis.max() - highest > EPSILON {
            findings.push(Finding::warning(
                "bands.coverage",
                "Bands do not cover the rating axis",
                format!(
                    "Bands span [{lowest}, {highest}] but the axis runs [{}, {}].",
                    axis.min(),
                    axis.max()
                ),
                None,
            ));
        }
    }

    findings
}
