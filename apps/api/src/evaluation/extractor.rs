//! Response Extractor: recovers one JSON object from free-form model output.
//!
//! Search order:
//! 1. first fenced block tagged `json`
//! 2. first fenced block of any kind
//!
//! Only the first match is ever parsed. A broken first block fails the extraction;
//! later blocks are never consulted.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no JSON block found")]
    NoJsonBlock,

    #[error("invalid JSON: {0}")]
    InvalidJson(String),
}

fn tagged_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```json(.*?)```").expect("tagged fence pattern is valid"))
}

fn generic_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```(.*?)```").expect("generic fence pattern is valid"))
}

/// Returns the interior of the preferred fenced block, if any.
pub fn find_json_candidate(raw: &str) -> Option<&str> {
    tagged_block()
        .captures(raw)
        .or_else(|| generic_block().captures(raw))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extracts and parses the first fenced JSON block of `raw`.
/// The decoded value must be an object; no further shape checks happen here.
pub fn extract_json_object(raw: &str) -> Result<Map<String, Value>, ExtractionError> {
    let candidate = find_json_candidate(raw).ok_or(ExtractionError::NoJsonBlock)?;

    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ExtractionError::InvalidJson(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
        Err(e) => Err(ExtractionError::InvalidJson(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
