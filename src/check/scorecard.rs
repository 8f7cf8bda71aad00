use super::EPSILON;
use crate::types::report::Finding;
use crate::types::scorecard::{FactorNode, Industry, IndustryRegistry};
use std::collections::HashSet;

pub fn scorecard_findings(registry: &IndustryRegistry) -> Vec<Finding> {
    registry.iter().flat_map(industry_findings).collect()
}

fn industry_findings(industry: &Industry) -> Vec<Finding> {
    let mut findings = Vec::new();
    if industry.factors.is_empty() {
        findings.push(Finding::warning(
            "scorecard.empty",
            "Industry has no factors",
            format!(
                "Industry '{}' declares no factors; every score would be 0.",
                industry.key
            ),
            Some(industry.key.clone()),
        ));
        return findings;
    }

    let total: f64 = industry.leaves().iter().map(|leaf| leaf.weight).sum();
    if (total - 100.0).abs() > EPSILON {
        findings.push(Finding::warning(
            "scorecard.weights",
            "Leaf weights do not sum to 100",
            format!(
                "Leaf weights of industry '{}' sum to {total}; the aggregate is off scale.",
                industry.key
            ),
            Some(industry.key.clone()),
        ));
    }
    for node in &industry.factors {
        check_group_weights(&industry.key, node, &mut findings);
    }

    let mut seen = HashSet::new();
    for leaf in industry.leaves() {
        if !seen.insert(leaf.id.as_str()) {
            findings.push(Finding::blocking(
                "scorecard.duplicate_id",
                "Duplicate leaf id",
                format!(
                    "Leaf '{}' appears more than once in industry '{}'; one value would feed both.",
                    leaf.id, industry.key
                ),
                Some(format!("{}/{}", industry.key, leaf.id)),
            ));
        }
    }

    findings
}

/// A group's own weight never enters the aggregate, so it must match what its
/// children carry.
fn check_group_weights(industry: &str, node: &FactorNode, findings: &mut Vec<Finding>) {
    let FactorNode::Group(group) = node else {
        return;
    };
    let carried: f64 = node.leaves().iter().map(|leaf| leaf.weight).sum();
    if (carried - group.weight).abs() > EPSILON {
        findings.push(Finding::warning(
            "scorecard.group_weight",
            "Group weight differs from its subfactors",
            format!(
                "Group '{}' declares {} but its subfactors carry {carried}.",
                group.id, group.weight
            ),
            Some(format!("{industry}/{}", group.id)),
        ));
    }
    for child in &group.children {
        check_group_weights(industry, child, findings);
    }
}
