//! Hosted summarization model client
//!
//! Sends text to the configured inference endpoint and translates every
//! transport, status and shape failure into a [`SummarizerError`].

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{error, info};
use url::Url;

use super::Summarizer;
use crate::core::config::AppConfig;
use crate::errors::SummarizerError;

const MAX_SUMMARY_TOKENS: u32 = 150;
const MIN_SUMMARY_TOKENS: u32 = 50;

/// Builds the JSON payload sent to the model endpoint.
#[must_use]
pub fn build_payload(text: &str) -> Value {
    json!({
        "inputs": text,
        "parameters": {
            "max_length": MAX_SUMMARY_TOKENS,
            "min_length": MIN_SUMMARY_TOKENS,
            "do_sample": false
        }
    })
}

/// Pulls `summary_text` out of a `[{"summary_text": ...}]` response.
///
/// # Errors
///
/// Returns [`SummarizerError::UpstreamContract`] for any other shape.
pub fn extract_summary(response: &Value) -> Result<String, SummarizerError> {
    let first = response
        .as_array()
        .ok_or_else(|| SummarizerError::UpstreamContract("expected a JSON array".to_string()))?
        .first()
        .ok_or_else(|| SummarizerError::UpstreamContract("empty result array".to_string()))?;

    first
        .get("summary_text")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .ok_or_else(|| {
            SummarizerError::UpstreamContract("missing summary_text in first result".to_string())
        })
}

/// Client for the hosted summarization model.
pub struct InferenceClient {
    http: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl InferenceClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        endpoint: Url,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SummarizerError> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            SummarizerError::Internal(format!("Failed to build inference HTTP client: {e}"))
        })?;
        Ok(Self {
            http,
            endpoint,
            api_key,
        })
    }

    /// # Errors
    ///
    /// See [`InferenceClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, SummarizerError> {
        Self::new(
            config.model_url.clone(),
            config.api_key.clone(),
            config.upstream_timeout,
        )
    }

    /// Sends one summarization attempt. No retries.
    ///
    /// # Errors
    ///
    /// - [`SummarizerError::Configuration`] if no credential is set (no request is made)
    /// - [`SummarizerError::Transport`] if the request cannot be sent or times out
    /// - [`SummarizerError::Upstream`] on a non-success status
    /// - [`SummarizerError::UpstreamContract`] on an unexpected response body
    #[tracing::instrument(level = "info", skip(self, text), fields(input_chars = text.chars().count()))]
    pub async fn generate_summary(&self, text: &str) -> Result<String, SummarizerError> {
        let Some(api_key) = self.api_key.as_deref() else {
            error!("Inference API key is not configured");
            return Err(SummarizerError::Configuration(
                "Inference API key is not configured".to_string(),
            ));
        };

        let payload = build_payload(text);

        #[cfg(feature = "debug-logs")]
        info!("Inference payload: {}", payload);

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            error!(status = status.as_u16(), "Inference API returned an error");
            return Err(SummarizerError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SummarizerError::UpstreamContract(format!("response is not JSON: {e}"))
        })?;

        let summary = extract_summary(&response_json)?;
        info!(summary_chars = summary.chars().count(), "Inference API returned summary");
        Ok(summary)
    }
}

#[async_trait]
impl Summarizer for InferenceClient {
    async fn summarize(&self, text: &str) -> Result<String, SummarizerError> {
        self.generate_summary(text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serves exactly one canned HTTP response and hands back the raw request.
    async fn one_shot_server(status_line: &'static str, body: &'static str) -> (Url, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if request_complete(&buf) {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            let _ = tx.send(String::from_utf8_lossy(&buf).to_string());
        });

        let url = Url::parse(&format!("http://{addr}/models/test")).unwrap();
        (url, rx)
    }

    fn request_complete(buf: &[u8]) -> bool {
        let text = String::from_utf8_lossy(buf);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        buf.len() >= header_end + 4 + content_length
    }

    #[test]
    fn test_payload_uses_fixed_generation_parameters() {
        let payload = build_payload("some text");
        assert_eq!(payload["inputs"], "some text");
        assert_eq!(payload["parameters"]["max_length"], 150);
        assert_eq!(payload["parameters"]["min_length"], 50);
        assert_eq!(payload["parameters"]["do_sample"], false);
    }

    #[test]
    fn test_extract_summary_happy_path() {
        let response = json!([{ "summary_text": "X" }]);
        assert_eq!(extract_summary(&response).unwrap(), "X");
    }

    #[test]
    fn test_extract_summary_rejects_other_shapes() {
        for response in [
            json!({ "summary_text": "X" }),
            json!([]),
            json!([{ "generated_text": "X" }]),
            json!([{ "summary_text": 42 }]),
            json!([{ "summary_text": "" }]),
            json!({ "error": "Model is loading" }),
        ] {
            assert!(
                matches!(
                    extract_summary(&response),
                    Err(SummarizerError::UpstreamContract(_))
                ),
                "expected contract error for {response}"
            );
        }
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network_call() {
        // Port 9 on localhost is never contacted; a request would surface as Transport.
        let url = Url::parse("http://127.0.0.1:9/models/test").unwrap();
        let client = InferenceClient::new(url, None, Duration::from_secs(1)).unwrap();

        let err = client.generate_summary("text").await.unwrap_err();
        assert!(matches!(err, SummarizerError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_success_response_is_extracted() {
        let (url, request_rx) =
            one_shot_server("200 OK", r#"[{"summary_text":"a short summary"}]"#).await;
        let client =
            InferenceClient::new(url, Some("hf_test".to_string()), Duration::from_secs(5)).unwrap();

        let summary = client.generate_summary("input text").await.unwrap();
        assert_eq!(summary, "a short summary");

        let request = request_rx.await.unwrap();
        assert!(request.starts_with("POST /models/test"));
        assert!(request.to_ascii_lowercase().contains("authorization: bearer hf_test"));
        assert!(request.contains(r#""do_sample":false"#));
    }

    #[tokio::test]
    async fn test_error_status_carries_status_and_body() {
        let (url, _rx) =
            one_shot_server("503 Service Unavailable", r#"{"error":"Model is loading"}"#).await;
        let client =
            InferenceClient::new(url, Some("hf_test".to_string()), Duration::from_secs(5)).unwrap();

        match client.generate_summary("input text").await {
            Err(SummarizerError::Upstream { status, body }) => {
                assert_eq!(status, 503);
                assert!(body.contains("Model is loading"));
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unexpected_success_body_is_contract_error() {
        let (url, _rx) = one_shot_server("200 OK", r#"{"unexpected":true}"#).await;
        let client =
            InferenceClient::new(url, Some("hf_test".to_string()), Duration::from_secs(5)).unwrap();

        let err = client.generate_summary("input text").await.unwrap_err();
        assert!(matches!(err, SummarizerError::UpstreamContract(_)));
    }

    #[tokio::test]
    async fn test_stalled_upstream_times_out_as_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            // Hold the connection open without ever answering.
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let url = Url::parse(&format!("http://{addr}/models/test")).unwrap();
        let client =
            InferenceClient::new(url, Some("hf_test".to_string()), Duration::from_millis(200))
                .unwrap();

        let err = client.generate_summary("input text").await.unwrap_err();
        assert!(matches!(err, SummarizerError::Transport(_)), "got {err:?}");
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_refused_connection_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("http://{addr}/models/test")).unwrap();
        let client =
            InferenceClient::new(url, Some("hf_test".to_string()), Duration::from_secs(5)).unwrap();

        let err = client.generate_summary("input text").await.unwrap_err();
        assert!(matches!(err, SummarizerError::Transport(_)), "got {err:?}");
        assert_eq!(err.status_code(), 500);
    }
}
