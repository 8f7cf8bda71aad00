use super::EPSILON;
use crate::types::report::Finding;
use crate::types::scale::{AxisRanges, Grade, ScaleDefinition};

pub fn scale_findings(scale: &ScaleDefinition) -> Vec<Finding> {
    let mut findings = Vec::new();

    for grade in Grade::ORDER {
        if scale.qualitative_value(grade).is_none() {
            findings.push(Finding::warning(
                "scale.missing_grade",
                "Grade has no qualitative value",
                format!("Qualitative token '{grade}' cannot be scored."),
                Some(grade.to_string()),
            ));
        }
    }

    let ranges = match scale.axis_ranges() {
        Ok(ranges) => ranges,
        Err(err) => {
            findings.push(Finding::blocking(
                "scale.missing_ranges",
                "Quantitative ranges incomplete",
                format!("{err}; every score request will fail."),
                None,
            ));
            return findings;
        }
    };

    findings.extend(order_findings(&ranges));

    for (grade, range) in ranges.iter() {
        let Some(value) = scale.qualitative_value(grade) else {
            continue;
        };
        if !range.contains(value) {
            findings.push(Finding::warning(
                "scale.inconsistent_grade",
                "Qualitative value outside its own range",
                format!(
                    "'{grade}' maps to {value} but its range is [{}, {}].",
                    range.low, range.high
                ),
                Some(grade.to_string()),
            ));
        }
    }

    findings
}

fn order_findings(ranges: &AxisRanges) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut previous: Option<(Grade, f64)> = None;
    for (grade, range) in ranges.iter() {
        if range.low > range.high {
            findings.push(range_order_finding(
                grade,
                format!("'{grade}' range [{}, {}] is inverted.", range.low, range.high),
            ));
        }
        if let Some((prev_grade, prev_high)) = previous {
            if (range.low - prev_high).abs() > EPSILON {
                findings.push(range_order_finding(
                    grade,
                    format!(
                        "'{grade}' starts at {} but '{prev_grade}' ends at {prev_high}.",
                        range.low
                    ),
                ));
            }
        }
        previous = Some((grade, range.high));
    }
    findings
}

fn range_order_finding(grade: Grade, body: String) -> Finding {
    Finding::warning(
        "scale.ranges_order",
        "Quantitative ranges not contiguous",
        body,
        Some(grade.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scale::AxisRange;
    use std::collections::BTreeMap;

    const STANDARD: [(Grade, f64, [f64; 2]); 8] = [
        (Grade::Aaa, 1.0, [0.5, 1.5]),
        (Grade::Aa, 3.0, [1.5, 4.5]),
        (Grade::A, 6.0, [4.5, 7.5]),
        (Grade::Baa, 9.0, [7.5, 10.5]),
        (Grade::Ba, 12.0, [10.5, 13.5]),
        (Grade::B, 15.0, [13.5, 16.5]),
        (Grade::Caa, 18.0, [16.5, 19.5]),
        (Grade::Ca, 20.0, [19.5, 20.5]),
    ];

    fn standard_scale() -> ScaleDefinition {
        ScaleDefinition {
            qualitative_to_numeric: STANDARD.iter().map(|(g, v, _)| (*g, *v)).collect(),
            quantitative_axis_ranges: Some(
                STANDARD
                    .iter()
                    .map(|(g, _, [low, high])| (*g, AxisRange::new(*low, *high)))
                    .collect::<BTreeMap<_, _>>(),
            ),
        }
    }

    fn ids(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|finding| finding.id.as_str()).collect()
    }

    #[test]
    fn standard_scale_is_clean() {
        assert!(scale_findings(&standard_scale()).is_empty());
    }

    #[test]
    fn missing_qualitative_grade_is_a_warning() {
        let mut scale = standard_scale();
        scale.qualitative_to_numeric.remove(&Grade::Caa);

        let findings = scale_findings(&scale);
        assert_eq!(ids(&findings), vec!["scale.missing_grade"]);
        assert_eq!(findings[0].subject.as_deref(), Some("Caa"));
    }

    #[test]
    fn incomplete_ranges_block() {
        let mut scale = standard_scale();
        if let Some(ranges) = scale.quantitative_axis_ranges.as_mut() {
            ranges.remove(&Grade::Ba);
        }

        let findings = scale_findings(&scale);
        assert_eq!(ids(&findings), vec!["scale.missing_ranges"]);
        assert!(findings[0].blocking);
        assert!(findings[0].body.contains("Ba"));
    }

    #[test]
    fn gap_between_ranges_is_reported() {
        let mut scale = standard_scale();
        if let Some(ranges) = scale.quantitative_axis_ranges.as_mut() {
            ranges.insert(Grade::A, AxisRange::new(5.0, 7.5));
        }

        let findings = scale_findings(&scale);
        assert_eq!(ids(&findings), vec!["scale.ranges_order"]);
        assert_eq!(findings[0].subject.as_deref(), Some("A"));
    }

    #[test]
    fn qualitative_value_outside_range_is_inconsistent() {
        let mut scale = standard_scale();
        scale.qualitative_to_numeric.insert(Grade::B, 17.0);

        let findings = scale_findings(&scale);
        assert_eq!(ids(&findings), vec!["scale.inconsistent_grade"]);
    }
}
