use super::read_data_file;
use crate::error::{RaterError, Result};
use crate::scoring::axis::AxisSpec;
use crate::types::scorecard::FactorKind;
use crate::types::scoring::{RawValue, ValueInput, ValueSet};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// One entry of a value-set file: either a bare value, or a table carrying an
/// optional type override and `to_axis` transform.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Detailed {
        #[serde(rename = "type")]
        kind: Option<FactorKind>,
        value: Option<RawValue>,
        to_axis: Option<AxisSpec>,
    },
    Bare(RawValue),
}

/// Loads a value set from TOML, or from JSON when the file ends in `.json`.
pub fn load_values(path: &Path) -> Result<ValueSet> {
    if !path.exists() {
        return Err(RaterError::PathNotFound(path.display().to_string()));
    }
    let content = read_data_file(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        parse_values_json(&content)
    } else {
        parse_values_toml(&content)
    };
    parsed.map_err(|err| RaterError::DataFormat(format!("{}: {}", path.display(), err)))
}

pub fn parse_values_toml(content: &str) -> Result<ValueSet> {
    let entries: BTreeMap<String, RawEntry> = toml::from_str(content)?;
    build_value_set(entries)
}

pub fn parse_values_json(content: &str) -> Result<ValueSet> {
    let entries: BTreeMap<String, RawEntry> = serde_json::from_str(content)?;
    build_value_set(entries)
}

fn build_value_set(entries: BTreeMap<String, RawEntry>) -> Result<ValueSet> {
    entries
        .into_iter()
        .map(|(id, entry)| {
            let input = match entry {
                RawEntry::Bare(raw) => ValueInput {
                    raw: Some(raw),
                    ..ValueInput::default()
                },
                RawEntry::Detailed {
                    kind,
                    value,
                    to_axis,
                } => ValueInput {
                    kind,
                    raw: value,
                    to_axis: to_axis
                        .map(|spec| spec.build())
                        .transpose()
                        .map_err(|err| RaterError::DataFormat(format!("{id}: {err}")))?,
                },
            };
            Ok((id, input))
        })
        .collect()
}
