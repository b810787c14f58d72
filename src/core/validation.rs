//! Shape and size checks for incoming summarization requests.

use serde_json::Value;

use super::models::{DocumentKind, SummarizeRequest};
use crate::errors::{FieldError, SummarizerError};

pub const MIN_TEXT_CHARS: usize = 50;

/// Parses a raw request body and validates it.
///
/// # Errors
///
/// Returns [`SummarizerError::Validation`] when the body is not JSON or any
/// field check fails.
pub fn validate_body(body: &str) -> Result<SummarizeRequest, SummarizerError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        SummarizerError::Validation(vec![FieldError::new(
            "",
            "invalid_json",
            format!("Request body is not valid JSON: {e}"),
        )])
    })?;
    validate(&value)
}

/// Checks a decoded request, collecting every violation before failing.
///
/// # Errors
///
/// Returns [`SummarizerError::Validation`] listing each violated field.
pub fn validate(value: &Value) -> Result<SummarizeRequest, SummarizerError> {
    let Some(object) = value.as_object() else {
        return Err(SummarizerError::Validation(vec![FieldError::new(
            "",
            "invalid_type",
            format!("Expected object, received {}", type_name(value)),
        )]));
    };

    let mut errors = Vec::new();

    let text = match object.get("text") {
        None => {
            errors.push(FieldError::new("text", "required", "Required"));
            None
        }
        Some(Value::String(s)) => {
            // Counted in Unicode scalar values, not UTF-16 units; astral
            // characters such as emoji count once.
            if s.chars().count() < MIN_TEXT_CHARS {
                errors.push(FieldError::new(
                    "text",
                    "too_small",
                    format!("Text must be at least {MIN_TEXT_CHARS} characters long"),
                ));
            }
            Some(s)
        }
        Some(other) => {
            errors.push(FieldError::new(
                "text",
                "invalid_type",
                format!("Expected string, received {}", type_name(other)),
            ));
            None
        }
    };

    let kind = match object.get("type") {
        None => Some(DocumentKind::default()),
        Some(raw) => {
            let parsed = raw.as_str().and_then(DocumentKind::parse);
            if parsed.is_none() {
                errors.push(FieldError::new(
                    "type",
                    "invalid_enum_value",
                    format!(
                        "Invalid enum value. Expected {}, received {}",
                        DocumentKind::ALLOWED
                            .iter()
                            .map(|k| format!("'{k}'"))
                            .collect::<Vec<_>>()
                            .join(" | "),
                        raw
                    ),
                ));
            }
            parsed
        }
    };

    match (text, kind) {
        (Some(text), Some(kind)) if errors.is_empty() => Ok(SummarizeRequest {
            text: text.clone(),
            kind,
        }),
        _ => Err(SummarizerError::Validation(errors)),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
