use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
    /// Industry key, factor id or data file the finding points at.
    pub subject: Option<String>,
}

impl Finding {
    pub fn warning(id: &str, title: &str, body: String, subject: Option<String>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body,
            blocking: false,
            subject,
        }
    }

    pub fn blocking(id: &str, title: &str, body: String, subject: Option<String>) -> Self {
        Self {
            blocking: true,
            ..Self::warning(id, title, body, subject)
        }
    }
}

/// Where a score report came from: when it was produced, by which build, and
/// from which data snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Provenance {
    pub generated_at: String,
    pub rater_version: String,
    pub data_fingerprint: String,
}

impl Provenance {
    pub fn now(data_fingerprint: &str) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            rater_version: env!("CARGO_PKG_VERSION").to_string(),
            data_fingerprint: data_fingerprint.to_string(),
        }
    }
}
