use crate::types::report::Provenance;
use crate::types::scorecard::{FactorNode, Industry};
use crate::types::scoring::ScoreResult;

pub fn to_markdown(industry: &str, result: &ScoreResult, provenance: &Provenance) -> String {
    let mut output = String::new();
    output.push_str("# Credit Rating Estimate\n\n");
    output.push_str(&format!("Industry: {industry}\n\n"));
    output.push_str(&format!("Final rating: {}\n\n", result.final_rating));
    output.push_str(&format!(
        "Aggregate score: {:.3}\n\n",
        result.aggregate_numeric
    ));

    output.push_str("## Breakdown\n\n");
    if result.breakdown.is_empty() {
        output.push_str("- none\n");
    } else {
        output.push_str("| factor | weight | value | score |\n");
        output.push_str("|---|---:|---|---:|\n");
        for row in &result.breakdown {
            output.push_str(&format!(
                "| {} | {:.2} | {} | {:.3} |\n",
                row.id, row.weight, row.raw, row.score
            ));
        }
    }

    output.push_str("\n## Provenance\n\n");
    output.push_str(&format!("- generated at: {}\n", provenance.generated_at));
    output.push_str(&format!("- credit-rater: {}\n", provenance.rater_version));
    output.push_str(&format!(
        "- data fingerprint: {}\n",
        provenance.data_fingerprint
    ));
    output
}

/// Indented factor tree with weights; leaves also show their declared type.
pub fn factor_tree(industry: &Industry) -> String {
    let mut output = match &industry.name {
        Some(name) => format!("{} ({name})\n", industry.key),
        None => format!("{}\n", industry.key),
    };
    for node in &industry.factors {
        push_node(&mut output, node, 0);
    }
    output
}

fn push_node(output: &mut String, node: &FactorNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        FactorNode::Leaf(leaf) => {
            output.push_str(&format!(
                "{indent}- {} [{}] {}\n",
                leaf.id, leaf.kind, leaf.weight
            ));
        }
        FactorNode::Group(group) => {
            output.push_str(&format!("{indent}- {} {}\n", group.id, group.weight));
            for child in &group.children {
                push_node(output, child, depth + 1);
            }
        }
    }
}
