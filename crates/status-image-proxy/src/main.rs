//! Status Image Proxy - read-through cache for HTTP status code images
//!
//! Serves `/<code>` from a local cache directory, filling misses from a
//! remote provider such as http.cat.

use clap::Parser;
use status_image_proxy::{start_server, AppState, ProxyConfig, Result, SharedState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter =
        EnvFilter::from_default_env().add_directive("status_image_proxy=info".parse()?);

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    let config = ProxyConfig::parse();

    info!("Starting Status Image Proxy...");
    info!("Listen address: {}", config.listen_addr());
    info!("Cache dir: {:?}", config.cache_dir);
    info!("Upstream: {}", config.upstream_url);

    let state: SharedState = Arc::new(AppState::from_config(&config));

    // Serve until the process is killed; failing to bind is fatal
    start_server(state, &config).await?;

    Ok(())
}
