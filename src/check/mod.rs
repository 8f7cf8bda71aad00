pub mod bands;
pub mod scale;
pub mod scorecard;

use crate::data::DataSnapshot;
use crate::types::report::Finding;

/// Tolerance for weight sums and interval edges in the data files.
pub(crate) const EPSILON: f64 = 1e-3;

pub fn check_snapshot(snapshot: &DataSnapshot) -> Vec<Finding> {
    let mut findings = scorecard::scorecard_findings(&snapshot.registry);
    findings.extend(scale::scale_findings(&snapshot.scale));

    let axis = snapshot.scale.axis_ranges().ok();
    findings.extend(bands::band_findings(&snapshot.bands, axis.as_ref()));
    findings
}
