//! Result Shaper: folds extractor output into the two-shape `AnalysisResult`.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::evaluation::extractor::{extract_json_object, ExtractionError};

/// Outcome of one evaluation call. Consumers discriminate on `status` before reading
/// anything else; there is no partial shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisResult {
    /// The parsed reply object, passed through unchanged.
    Success { analysis: Map<String, Value> },
    /// Extraction failed; `raw_response` is the model reply verbatim.
    Failure { error: String, raw_response: String },
}

impl AnalysisResult {
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisResult::Success { .. })
    }
}

/// Runs extraction over a raw reply and shapes the outcome. Never fails.
pub fn shape_response(raw: &str) -> AnalysisResult {
    match extract_json_object(raw) {
        Ok(analysis) => AnalysisResult::Success { analysis },
        Err(e) => {
            match &e {
                ExtractionError::NoJsonBlock => tracing::error!("JSON extraction failed: {e}"),
                ExtractionError::InvalidJson(_) => tracing::error!("JSON decoding failed: {e}"),
            }
            AnalysisResult::Failure {
                error: e.to_string(),
                raw_response: raw.to_string(),
            }
        }
    }
}
