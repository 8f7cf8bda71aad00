use crate::types::report::Provenance;
use crate::types::scoring::ScoreResult;
use serde::Serialize;

#[derive(Serialize)]
struct ScoreReport<'a> {
    industry: &'a str,
    #[serde(flatten)]
    result: &'a ScoreResult,
    provenance: &'a Provenance,
}

pub fn to_json(
    industry: &str,
    result: &ScoreResult,
    provenance: &Provenance,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ScoreReport {
        industry,
        result,
        provenance,
    })
}
