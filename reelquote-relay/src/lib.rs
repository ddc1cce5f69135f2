//! reelquote-relay library - quote submission relay service
//!
//! Accepts finalized quote payloads from the wizard and forwards them
//! verbatim to the configured third-party webhook. Best-effort by
//! contract: callers never wait on the upstream outcome.

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Shared HTTP client for upstream forwarding
    pub http: reqwest::Client,
    /// Upstream webhook URL quotes are forwarded to
    pub webhook_url: String,
}

impl AppState {
    /// Create new application state
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            webhook_url: webhook_url.into(),
        }
    }
}

/// Build application router
///
/// `/api/quote` accepts only POST; any other method gets 405 with an
/// `Allow: POST` header. `/health` needs no special handling.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::post;

    Router::new()
        .route(
            "/api/quote",
            post(api::relay_quote).fallback(api::method_not_allowed),
        )
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
