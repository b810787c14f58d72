use summarizer::api::{AppState, handler};
use summarizer::core::config::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    summarizer::setup_logging();

    let config = AppConfig::from_env()?;
    info!(
        endpoint = %config.model_url,
        credential_configured = config.api_key.is_some(),
        timeout_secs = config.upstream_timeout.as_secs(),
        "Starting summarizer API"
    );

    let state = AppState::from_config(config)?;
    let state_ref = &state;

    lambda_runtime::run(lambda_runtime::service_fn(move |event| async move {
        handler(state_ref, event).await
    }))
    .await
}
