//! Quote relay endpoint
//!
//! Forwards the submitted quote JSON verbatim to the upstream
//! webhook. 200 on upstream success, the upstream status code on
//! upstream failure, 500 on a transport error in the relay itself.
//! The 405 for non-POST methods is the only hard rejection in the
//! whole flow.

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::AppState;

/// Relay outcome body
#[derive(Debug, Serialize)]
pub struct RelayResponse {
    pub success: bool,
    pub message: String,
}

impl RelayResponse {
    fn new(success: bool, message: &str) -> Json<Self> {
        Json(Self {
            success,
            message: message.to_string(),
        })
    }
}

/// POST /api/quote
///
/// The body is opaque to the relay: it is forwarded as-is, not
/// validated (the wizard is trusted to shape it).
pub async fn relay_quote(State(state): State<AppState>, Json(payload): Json<Value>) -> Response {
    match state.http.post(&state.webhook_url).json(&payload).send().await {
        Ok(upstream) if upstream.status().is_success() => {
            info!("quote forwarded to webhook ({})", upstream.status());
            (
                StatusCode::OK,
                RelayResponse::new(true, "Data sent to Zapier successfully"),
            )
                .into_response()
        }
        Ok(upstream) => {
            warn!("webhook rejected quote: {}", upstream.status());
            // Pass the upstream status through to the caller
            let status = StatusCode::from_u16(upstream.status().as_u16())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            (
                status,
                RelayResponse::new(false, "Failed to send data to Zapier"),
            )
                .into_response()
        }
        Err(e) => {
            error!("error forwarding quote to webhook: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                RelayResponse::new(false, "Server error"),
            )
                .into_response()
        }
    }
}

/// Any non-POST method on the relay route: 405 with `Allow: POST`
/// and a plain-text body naming the rejected method
pub async fn method_not_allowed(method: Method) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        format!("Method {} Not Allowed", method),
    )
        .into_response()
}
