use crate::error::RaterError;
use serde::Deserialize;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_INDUSTRIES_FILE: &str = "industries_min.json";
pub const DEFAULT_FACTOR_SCALE_FILE: &str = "factor_scale.json";
pub const DEFAULT_AGGREGATE_BINS_FILE: &str = "aggregate_bins.csv";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RaterConfig {
    pub data: Option<DataConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    pub dir: Option<String>,
    pub industries: Option<String>,
    pub factor_scale: Option<String>,
    pub aggregate_bins: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatSetting {
    #[default]
    Md,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub format: Option<ReportFormatSetting>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl RaterConfig {
    pub fn data_dir(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|data| data.dir.as_deref())
            .unwrap_or(DEFAULT_DATA_DIR)
    }

    pub fn industries_file(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|data| data.industries.as_deref())
            .unwrap_or(DEFAULT_INDUSTRIES_FILE)
    }

    pub fn factor_scale_file(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|data| data.factor_scale.as_deref())
            .unwrap_or(DEFAULT_FACTOR_SCALE_FILE)
    }

    pub fn aggregate_bins_file(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|data| data.aggregate_bins.as_deref())
            .unwrap_or(DEFAULT_AGGREGATE_BINS_FILE)
    }

    pub fn report_format(&self) -> ReportFormatSetting {
        self.output
            .as_ref()
            .and_then(|output| output.format)
            .unwrap_or_default()
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn validate(&self) -> Result<(), RaterError> {
        if let Some(data) = &self.data {
            for (key, value) in [
                ("data.dir", &data.dir),
                ("data.industries", &data.industries),
                ("data.factor_scale", &data.factor_scale),
                ("data.aggregate_bins", &data.aggregate_bins),
            ] {
                if value.as_deref().is_some_and(|value| value.trim().is_empty()) {
                    return Err(RaterError::ConfigParse(format!("{key} cannot be empty")));
                }
            }
        }

        if self
            .logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .is_some_and(|level| level.trim().is_empty())
        {
            return Err(RaterError::ConfigParse(
                "logging.level cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: RaterConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.data_dir(), "data");
        assert_eq!(cfg.industries_file(), "industries_min.json");
        assert_eq!(cfg.factor_scale_file(), "factor_scale.json");
        assert_eq!(cfg.aggregate_bins_file(), "aggregate_bins.csv");
        assert_eq!(cfg.report_format(), ReportFormatSetting::Md);
        assert_eq!(cfg.log_level(), "warn");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[data]
dir = "fixtures"
industries = "industries.json"
factor_scale = "scale.json"
aggregate_bins = "bins.csv"

[output]
format = "json"

[logging]
level = "debug"
"#;
        let cfg: RaterConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.data_dir(), "fixtures");
        assert_eq!(cfg.industries_file(), "industries.json");
        assert_eq!(cfg.factor_scale_file(), "scale.json");
        assert_eq!(cfg.aggregate_bins_file(), "bins.csv");
        assert_eq!(cfg.report_format(), ReportFormatSetting::Json);
        assert_eq!(cfg.log_level(), "debug");
    }

    #[test]
    fn unknown_report_format_fails_to_parse() {
        let toml_str = r#"
[output]
format = "sarif"
"#;
        assert!(toml::from_str::<RaterConfig>(toml_str).is_err());
    }

    #[test]
    fn validate_rejects_empty_file_name() {
        let toml_str = r#"
[data]
factor_scale = "  "
"#;
        let cfg: RaterConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("data.factor_scale cannot be empty"));
    }

    #[test]
    fn validate_rejects_empty_log_level() {
        let toml_str = r#"
[logging]
level = ""
"#;
        let cfg: RaterConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("logging.level"));
    }
}
