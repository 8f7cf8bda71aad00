use crate::data::DataPaths;
use crate::error::{RaterError, Result};
use crate::types::config::RaterConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "credit-rater.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".credit-rater/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/credit-rater/config.toml";

pub const ENV_DATA_DIR: &str = "CREDIT_RATER_DATA_DIR";
pub const ENV_INDUSTRIES: &str = "CREDIT_RATER_INDUSTRIES";
pub const ENV_FACTOR_SCALE: &str = "CREDIT_RATER_FACTOR_SCALE";
pub const ENV_AGGREGATE_BINS: &str = "CREDIT_RATER_AGGREGATE_BINS";

pub fn load_config(root: &Path) -> Result<RaterConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Merges global, repository and local files in that order. Missing files are
/// skipped; with none present the defaults apply.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<RaterConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: RaterConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| RaterError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolves the three data files. Precedence: `data_dir_override` (the CLI flag),
/// then environment, then config, then `<root>/data`.
pub fn resolve_data_paths(
    root: &Path,
    config: &RaterConfig,
    data_dir_override: Option<&Path>,
) -> DataPaths {
    resolve_data_paths_with_env(root, config, data_dir_override, |key| {
        std::env::var(key).ok()
    })
}

pub(crate) fn resolve_data_paths_with_env(
    root: &Path,
    config: &RaterConfig,
    data_dir_override: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> DataPaths {
    let env = |key: &str| env(key).filter(|value| !value.trim().is_empty());

    let data_dir = match data_dir_override {
        Some(dir) => root.join(dir),
        None => root.join(env(ENV_DATA_DIR).unwrap_or_else(|| config.data_dir().to_string())),
    };

    // An explicit --data-dir wins over per-file environment overrides too.
    if data_dir_override.is_some() {
        return DataPaths {
            industries: data_dir.join(config.industries_file()),
            factor_scale: data_dir.join(config.factor_scale_file()),
            aggregate_bins: data_dir.join(config.aggregate_bins_file()),
        };
    }

    let file = |env_key: &str, configured: &str| match env(env_key) {
        Some(path) => root.join(path),
        None => data_dir.join(configured),
    };
    DataPaths {
        industries: file(ENV_INDUSTRIES, config.industries_file()),
        factor_scale: file(ENV_FACTOR_SCALE, config.factor_scale_file()),
        aggregate_bins: file(ENV_AGGREGATE_BINS, config.aggregate_bins_file()),
    }
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| RaterError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
