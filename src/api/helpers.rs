//! Response builders shared across handlers.
//!
//! Every response is an API Gateway proxy result whose `body` is a JSON
//! string.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

use crate::errors::{GENERIC_FAILURE_MESSAGE, SummarizerError};

fn gateway_response(status_code: u16, body: String) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body
    })
}

/// Returns a response with the given status and a serialized JSON body.
#[must_use]
pub fn json_response<T: Serialize>(status_code: u16, payload: &T) -> Value {
    match serde_json::to_string(payload) {
        Ok(body) => gateway_response(status_code, body),
        Err(e) => {
            error!("Failed to serialize response body: {}", e);
            message_response(500, GENERIC_FAILURE_MESSAGE)
        }
    }
}

/// Returns a 200 OK response with a serialized JSON body.
#[must_use]
pub fn ok_json<T: Serialize>(payload: &T) -> Value {
    json_response(200, payload)
}

/// Returns a `{ "message": ... }` response with the given status code.
#[must_use]
pub fn message_response(status_code: u16, message: &str) -> Value {
    gateway_response(status_code, json!({ "message": message }).to_string())
}

/// Maps a pipeline failure to its HTTP response.
///
/// Validation failures carry the per-field `errors` array.
#[must_use]
pub fn err_response(err: &SummarizerError) -> Value {
    let status = err.status_code();
    match err.field_errors() {
        Some(errors) => gateway_response(
            status,
            json!({ "message": err.public_message(), "errors": errors }).to_string(),
        ),
        None => message_response(status, &err.public_message()),
    }
}
