use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorKind {
    #[default]
    #[serde(alias = "quantitative", alias = "quant")]
    Numeric,
    #[serde(alias = "qual")]
    Qualitative,
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorKind::Numeric => f.write_str("numeric"),
            FactorKind::Qualitative => f.write_str("qualitative"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeafFactor {
    pub id: String,
    pub name: Option<String>,
    pub weight: f64,
    pub kind: FactorKind,
}

/// A factor scored only through its children; its own weight does not enter the aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorGroup {
    pub id: String,
    pub name: Option<String>,
    pub weight: f64,
    pub children: Vec<FactorNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FactorNode {
    Leaf(LeafFactor),
    Group(FactorGroup),
}

impl FactorNode {
    pub fn id(&self) -> &str {
        match self {
            FactorNode::Leaf(leaf) => &leaf.id,
            FactorNode::Group(group) => &group.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            FactorNode::Leaf(leaf) => leaf.name.as_deref(),
            FactorNode::Group(group) => group.name.as_deref(),
        }
    }

    pub fn weight(&self) -> f64 {
        match self {
            FactorNode::Leaf(leaf) => leaf.weight,
            FactorNode::Group(group) => group.weight,
        }
    }

    /// Depth-first leaves in declaration order.
    pub fn leaves(&self) -> Vec<&LeafFactor> {
        let mut out = Vec::new();
        collect_leaves(self, &mut out);
        out
    }
}

fn collect_leaves<'a>(node: &'a FactorNode, out: &mut Vec<&'a LeafFactor>) {
    match node {
        FactorNode::Leaf(leaf) => out.push(leaf),
        FactorNode::Group(group) => {
            for child in &group.children {
                collect_leaves(child, out);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Industry {
    pub key: String,
    pub name: Option<String>,
    pub factors: Vec<FactorNode>,
}

impl Industry {
    pub fn leaves(&self) -> Vec<&LeafFactor> {
        self.factors.iter().flat_map(FactorNode::leaves).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndustryRegistry {
    industries: BTreeMap<String, Industry>,
}

impl IndustryRegistry {
    pub fn new(industries: impl IntoIterator<Item = Industry>) -> Self {
        Self {
            industries: industries
                .into_iter()
                .map(|industry| (industry.key.clone(), industry))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Industry> {
        self.industries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Industry> {
        self.industries.values()
    }

    pub fn len(&self) -> usize {
        self.industries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.industries.is_empty()
    }
}
