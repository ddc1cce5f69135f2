//! Submission gateway client
//!
//! Sends a finalized quote snapshot to the relay endpoint. The call
//! is best-effort by policy: `send_detached` spawns the request and
//! never blocks the wizard flow; failures are logged and swallowed.

use crate::error::Result;
use crate::pricing::PriceQuote;
use crate::selections::SelectionStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

/// The flat submission payload: every selection field plus the price
/// estimate, a session id, and a timestamp.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSubmission {
    #[serde(flatten)]
    pub selections: SelectionStore,
    pub price_estimate: PriceQuote,
    pub session_id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

/// HTTP client for the quote relay endpoint
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GatewayClient {
    /// Client targeting the given relay endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// POST the submission and surface the outcome. Used by
    /// `send_detached` and directly by tests.
    pub async fn send(&self, submission: &QuoteSubmission) -> Result<()> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;
        response.error_for_status()?;
        debug!(session_id = %submission.session_id, "quote submission relayed");
        Ok(())
    }

    /// Fire-and-forget submission. Spawns the request and returns
    /// immediately; a failed or rejected call is logged at WARN and
    /// otherwise ignored. Must be called within a tokio runtime.
    pub fn send_detached(&self, submission: QuoteSubmission) {
        let client = self.clone();
        tokio::spawn(async move {
            if let Err(e) = client.send(&submission).await {
                warn!(
                    session_id = %submission.session_id,
                    "quote submission failed (ignored): {}",
                    e
                );
            }
        });
    }
}
