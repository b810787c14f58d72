//! Accessors for API Gateway proxy events (payload v2, with v1 fallbacks).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use url::form_urlencoded;

use crate::errors::{FieldError, SummarizerError};

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Upper-cased HTTP method of the event.
#[must_use]
pub fn request_method(event: &Value) -> Option<String> {
    v_str(event, &["requestContext", "http", "method"])
        .or_else(|| v_str(event, &["httpMethod"]))
        .map(str::to_ascii_uppercase)
}

/// Request path with any `/api` prefix and trailing slash removed.
#[must_use]
pub fn request_path(event: &Value) -> Option<String> {
    let raw = v_str(event, &["rawPath"]).or_else(|| v_str(event, &["path"]))?;
    let path = raw.strip_prefix("/api").filter(|p| p.is_empty() || p.starts_with('/')).unwrap_or(raw);
    let trimmed = path.trim_end_matches('/');
    Some(if trimmed.is_empty() { "/".to_string() } else { trimmed.to_string() })
}

pub fn header<'a>(event: &'a Value, name: &str) -> Option<&'a str> {
    event.get("headers").and_then(|h| get_header_value(h, name))
}

/// Raw request body bytes, decoding base64 when the gateway flagged it.
///
/// # Errors
///
/// Returns a validation error if a base64 body cannot be decoded.
pub fn body_bytes(event: &Value) -> Result<Vec<u8>, SummarizerError> {
    let body = event.get("body").and_then(|b| b.as_str()).unwrap_or("");
    let encoded = event
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if encoded {
        STANDARD.decode(body).map_err(|e| {
            SummarizerError::Validation(vec![FieldError::new(
                "",
                "invalid_encoding",
                format!("Request body is not valid base64: {e}"),
            )])
        })
    } else {
        Ok(body.as_bytes().to_vec())
    }
}

/// Request body as UTF-8 text.
///
/// # Errors
///
/// Returns a validation error if the body is not valid UTF-8.
pub fn body_text(event: &Value) -> Result<String, SummarizerError> {
    String::from_utf8(body_bytes(event)?).map_err(|_| {
        SummarizerError::Validation(vec![FieldError::new(
            "",
            "invalid_encoding",
            "Request body is not valid UTF-8",
        )])
    })
}

/// Looks up a query parameter from the parsed map or the raw query string.
#[must_use]
pub fn query_param(event: &Value, name: &str) -> Option<String> {
    if let Some(v) = v_str(event, &["queryStringParameters", name]) {
        return Some(v.to_string());
    }
    v_str(event, &["rawQueryString"]).and_then(|q| {
        form_urlencoded::parse(q.as_bytes())
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_and_path_from_v2_event() {
        let event = json!({
            "rawPath": "/api/summarize",
            "requestContext": { "http": { "method": "post" } }
        });
        assert_eq!(request_method(&event).as_deref(), Some("POST"));
        assert_eq!(request_path(&event).as_deref(), Some("/summarize"));
    }

    #[test]
    fn test_method_and_path_from_v1_event() {
        let event = json!({ "path": "/summaries/", "httpMethod": "GET" });
        assert_eq!(request_method(&event).as_deref(), Some("GET"));
        assert_eq!(request_path(&event).as_deref(), Some("/summaries"));
    }

    #[test]
    fn test_api_prefix_only_stripped_on_segment_boundary() {
        let event = json!({ "rawPath": "/apikeys" });
        assert_eq!(request_path(&event).as_deref(), Some("/apikeys"));
        let event = json!({ "rawPath": "/api" });
        assert_eq!(request_path(&event).as_deref(), Some("/"));
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let event = json!({ "headers": { "content-type": "application/json" } });
        assert_eq!(header(&event, "Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_base64_body_is_decoded() {
        let event = json!({ "body": "aGVsbG8=", "isBase64Encoded": true });
        assert_eq!(body_text(&event).unwrap(), "hello");

        let event = json!({ "body": "%%%", "isBase64Encoded": true });
        assert!(matches!(body_bytes(&event), Err(SummarizerError::Validation(_))));
    }

    #[test]
    fn test_query_param_sources() {
        let event = json!({ "queryStringParameters": { "limit": "5" } });
        assert_eq!(query_param(&event, "limit").as_deref(), Some("5"));

        let event = json!({ "rawQueryString": "a=1&limit=3" });
        assert_eq!(query_param(&event, "limit").as_deref(), Some("3"));
        assert_eq!(query_param(&event, "missing"), None);
    }

    #[test]
    fn test_query_param_is_percent_decoded() {
        let event = json!({ "rawQueryString": "limit=%35" });
        assert_eq!(query_param(&event, "limit").as_deref(), Some("5"));

        let event = json!({ "rawQueryString": "q=two+words%21&limit=7" });
        assert_eq!(query_param(&event, "q").as_deref(), Some("two words!"));
        assert_eq!(query_param(&event, "limit").as_deref(), Some("7"));
    }
}
