//! HTTP API handlers for reelquote-relay

pub mod health;
pub mod relay;

pub use health::health_routes;
pub use relay::{method_not_allowed, relay_quote};
