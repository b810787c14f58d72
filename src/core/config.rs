use anyhow::{Context, bail};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Credential for the inference endpoint. Checked per request, not at boot.
    pub api_key: Option<String>,
    pub model_url: Url,
    pub upstream_timeout: Duration,
    pub history_limit: usize,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Fails when an optional variable is present but malformed. A missing
    /// credential is not an error here.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("HUGGINGFACE_API_KEY")
            .or_else(|| lookup("HF_API_KEY"))
            .filter(|k| !k.trim().is_empty());

        let raw_url = lookup("HUGGINGFACE_API_URL").unwrap_or_else(|| DEFAULT_MODEL_URL.to_string());
        let model_url = Url::parse(&raw_url)
            .with_context(|| format!("HUGGINGFACE_API_URL: invalid URL {raw_url:?}"))?;
        if !matches!(model_url.scheme(), "http" | "https") {
            bail!("HUGGINGFACE_API_URL: unsupported scheme {:?}", model_url.scheme());
        }

        let timeout_secs = match lookup("SUMMARIZER_HTTP_TIMEOUT_SECS") {
            Some(raw) => parse_positive(&raw).with_context(|| {
                format!("SUMMARIZER_HTTP_TIMEOUT_SECS: expected a positive integer, got {raw:?}")
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let history_limit = match lookup("SUMMARIZER_HISTORY_LIMIT") {
            Some(raw) => parse_positive(&raw).with_context(|| {
                format!("SUMMARIZER_HISTORY_LIMIT: expected a positive integer, got {raw:?}")
            })?,
            None => DEFAULT_HISTORY_LIMIT as u64,
        };

        Ok(Self {
            api_key,
            model_url,
            upstream_timeout: Duration::from_secs(timeout_secs),
            history_limit: usize::try_from(history_limit)
                .context("SUMMARIZER_HISTORY_LIMIT: value out of range")?,
        })
    }
}

fn parse_positive(raw: &str) -> anyhow::Result<u64> {
    let value: u64 = raw.trim().parse()?;
    if value == 0 {
        bail!("must be greater than zero");
    }
    Ok(value)
}
