use thiserror::Error;

/// Failures raised by the scoring engine. Every variant is fatal to the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("unknown industry: {key}")]
    UnknownIndustry { key: String },

    #[error("unknown grade '{token}' for {id}")]
    UnknownGrade { id: String, token: String },

    #[error("missing value for {id}")]
    MissingValue { id: String },

    #[error("quantitative axis range missing for grade {grade}")]
    MissingScaleData { grade: String },

    #[error("non-numeric value '{raw}' for {id}")]
    InvalidNumber { id: String, raw: String },
}

#[derive(Error, Debug)]
pub enum RaterError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("data file not found: {0}")]
    DataNotFound(String),

    #[error("data format error: {0}")]
    DataFormat(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("scoring failed: {0}")]
    Score(#[from] ScoreError),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, RaterError>;
