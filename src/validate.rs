use serde_json::Value;
use thiserror::Error;

/// Field names a payload must carry as top-level keys to be accepted.
/// Can be overridden via the REQUIRED_FIELDS environment variable.
pub const DEFAULT_REQUIRED_FIELDS: &[&str] = &["id", "timestamp", "source"];

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("request body is empty")]
    EmptyBody,
    #[error("request body is not valid JSON - {0}")]
    InvalidJson(String),
    #[error("payload is missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

/// Validates a raw request body and returns the decoded payload text.
///
/// The returned text is the UTF-8 decoding of the original bytes, never a
/// re-serialization of the parsed value, so field order and formatting are
/// preserved for the downstream consumer.
pub fn validate(body: &[u8], required_fields: &[String]) -> Result<String, ValidationError> {
    if body.is_empty() {
        return Err(ValidationError::EmptyBody);
    }

    let text =
        std::str::from_utf8(body).map_err(|e| ValidationError::InvalidJson(e.to_string()))?;
    let payload: Value =
        serde_json::from_str(text).map_err(|e| ValidationError::InvalidJson(e.to_string()))?;

    // Value::get returns None for non-object payloads, so arrays and scalars
    // fail the field check rather than erroring separately.
    let missing: Vec<String> = required_fields
        .iter()
        .filter(|field| payload.get(field.as_str()).is_none())
        .cloned()
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    Ok(text.to_owned())
}
