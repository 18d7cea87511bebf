use anyhow::Context;
use hotel_search::routes::{router, AppState};
use hotel_search::{HotelSearchService, ProviderConfig, RapidApiProvider, ServerConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    hotel_search::telemetry::init_tracing();

    let provider_config = ProviderConfig::from_env().context("Invalid provider configuration")?;
    let server_config = ServerConfig::from_env().context("Invalid server configuration")?;

    let provider = RapidApiProvider::new(provider_config)?;
    tracing::info!(
        base_url = %provider.config().base_url,
        timeout_ms = provider.config().timeout_ms,
        "Hotel provider configured"
    );

    let state = AppState {
        service: HotelSearchService::new(Arc::new(provider)),
    };

    let listener = tokio::net::TcpListener::bind(server_config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", server_config.bind_addr))?;
    tracing::info!(addr = %server_config.bind_addr, "Starting server");

    axum::serve(listener, router(state)).await?;
    Ok(())
}
