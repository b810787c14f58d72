//! API Lambda handler - thin router that delegates to specialized handlers.
//!
//! This module handles:
//! - Method/path resolution for API Gateway events
//! - Summarization (delegated to `summarize`)
//! - Document uploads (delegated to `documents`)
//! - History lookups (delegated to `summaries`)

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

use super::{AppState, documents, helpers, parsing, summaries, summarize};
use crate::errors::SummarizerError;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never fails at the Lambda level; every failure becomes an HTTP response.
pub async fn function_handler(state: &AppState, event: LambdaEvent<Value>) -> Result<Value, Error> {
    Ok(route(state, &event.payload).await)
}

/// Routes one gateway event and returns the gateway response.
pub async fn route(state: &AppState, event: &Value) -> Value {
    let correlation_id = Uuid::new_v4().to_string();
    let method = parsing::request_method(event).unwrap_or_default();
    let path = parsing::request_path(event).unwrap_or_default();

    let span = info_span!("request", %correlation_id, %method, %path);
    async move {
        info!("API Lambda received request");
        let response = dispatch(state, event, &method, &path).await;
        info!(status = response["statusCode"].as_u64(), "API Lambda responded");
        response
    }
    .instrument(span)
    .await
}

async fn dispatch(state: &AppState, event: &Value, method: &str, path: &str) -> Value {
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        ("POST", ["summarize"]) => handle_summarize(state, event).await,
        ("POST", ["extract-document" | "extract-pdf"]) => handle_extract(event).await,
        ("GET", ["summaries"]) => handle_recent(state, event).await,
        ("GET", ["summaries", id]) => respond(summaries::by_id(state, id).await),
        (_, ["summarize" | "extract-document" | "extract-pdf" | "summaries"] | ["summaries", _]) => {
            warn!("Method not allowed");
            helpers::message_response(405, "Method not allowed")
        }
        _ => {
            warn!("No route matched");
            helpers::message_response(404, "Not found")
        }
    }
}

async fn handle_summarize(state: &AppState, event: &Value) -> Value {
    let result = match parsing::body_text(event) {
        Ok(body) => summarize::summarize(state, &body).await,
        Err(e) => Err(e),
    };
    respond(result)
}

async fn handle_extract(event: &Value) -> Value {
    respond(documents::extract_document(event).await)
}

async fn handle_recent(state: &AppState, event: &Value) -> Value {
    let limit = parsing::query_param(event, "limit");
    let result = match summaries::parse_limit(limit.as_deref(), state.config.history_limit) {
        Ok(limit) => summaries::recent(state, limit).await,
        Err(e) => Err(e),
    };
    respond(result)
}

fn respond<T: serde::Serialize>(result: Result<T, SummarizerError>) -> Value {
    match result {
        Ok(payload) => helpers::ok_json(&payload),
        Err(e) => {
            if e.status_code() >= 500 {
                error!("Request failed: {}", e);
            } else {
                warn!("Request rejected: {}", e);
            }
            helpers::err_response(&e)
        }
    }
}
