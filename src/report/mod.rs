pub mod json;
pub mod md;

use crate::error::RaterError;
use crate::types::report::Provenance;
use crate::types::scoring::ScoreResult;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(
    industry: &str,
    result: &ScoreResult,
    provenance: &Provenance,
    format: OutputFormat,
) -> Result<String, RaterError> {
    match format {
        OutputFormat::Json => {
            json::to_json(industry, result, provenance).map_err(RaterError::Json)
        }
        OutputFormat::Md => Ok(md::to_markdown(industry, result, provenance)),
    }
}
