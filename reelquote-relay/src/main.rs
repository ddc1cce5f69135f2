//! reelquote-relay - Quote submission relay service
//!
//! Accepts finalized quote payloads over HTTP and forwards them to
//! the configured third-party webhook. Fire-and-forget from the
//! wizard's perspective; the relay reports the upstream outcome to
//! whoever does care to look.

use anyhow::Result;
use clap::Parser;
use reelquote_relay::config::{Args, RelayConfig};
use reelquote_relay::{build_router, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting ReelQuote relay (reelquote-relay) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();
    let config = RelayConfig::resolve(&args)?;
    info!("Forwarding quotes to {}", config.webhook_url);

    let state = AppState::new(config.webhook_url);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!("reelquote-relay listening on http://{}", config.bind);
    info!("Health check: http://{}/health", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
