use super::read_data_file;
use crate::error::{RaterError, Result};
use crate::types::scorecard::{
    FactorGroup, FactorKind, FactorNode, Industry, IndustryRegistry, LeafFactor,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// The registry file is either keyed by industry or a list of industries with ids.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRegistry {
    Keyed(BTreeMap<String, RawIndustry>),
    Listed(Vec<RawIndustry>),
}

#[derive(Debug, Deserialize)]
struct RawIndustry {
    id: Option<String>,
    name: Option<String>,
    #[serde(default)]
    factors: Vec<RawFactor>,
}

#[derive(Debug, Deserialize)]
struct RawFactor {
    id: Option<String>,
    name: Option<String>,
    #[serde(default)]
    weight: f64,
    #[serde(rename = "type", default)]
    kind: FactorKind,
    #[serde(default)]
    subfactors: Vec<RawFactor>,
}

pub fn load_industries(path: &Path) -> Result<IndustryRegistry> {
    let content = read_data_file(path)?;
    parse_industries(&content)
        .map_err(|err| RaterError::DataFormat(format!("{}: {}", path.display(), err)))
}

pub fn parse_industries(content: &str) -> Result<IndustryRegistry> {
    let raw: RawRegistry = serde_json::from_str(content)?;
    let industries = match raw {
        RawRegistry::Keyed(map) => map
            .into_iter()
            .map(|(key, industry)| build_industry(key, industry))
            .collect::<Result<Vec<_>>>()?,
        RawRegistry::Listed(list) => list
            .into_iter()
            .enumerate()
            .map(|(index, industry)| {
                let key = industry.id.clone().ok_or_else(|| {
                    RaterError::DataFormat(format!("industry #{index} has no id"))
                })?;
                build_industry(key, industry)
            })
            .collect::<Result<Vec<_>>>()?,
    };
    Ok(IndustryRegistry::new(industries))
}

fn build_industry(key: String, raw: RawIndustry) -> Result<Industry> {
    let factors = raw
        .factors
        .into_iter()
        .map(|factor| build_factor(&key, factor))
        .collect::<Result<Vec<_>>>()?;
    Ok(Industry {
        key,
        name: raw.name,
        factors,
    })
}

fn build_factor(industry: &str, raw: RawFactor) -> Result<FactorNode> {
    let id = raw.id.or_else(|| raw.name.clone()).ok_or_else(|| {
        RaterError::DataFormat(format!(
            "factor in industry '{industry}' has neither id nor name"
        ))
    })?;

    if raw.subfactors.is_empty() {
        return Ok(FactorNode::Leaf(LeafFactor {
            id,
            name: raw.name,
            weight: raw.weight,
            kind: raw.kind,
        }));
    }

    let children = raw
        .subfactors
        .into_iter()
        .map(|child| build_factor(industry, child))
        .collect::<Result<Vec<_>>>()?;
    Ok(FactorNode::Group(FactorGroup {
        id,
        name: raw.name,
        weight: raw.weight,
        children,
    }))
}
