//! # ReelQuote Core Library
//!
//! The quote-wizard engine for video production projects:
//! - Price catalog (option vocabularies and rates per branch)
//! - Selection store (immutable-update data model)
//! - Pricing engine (pure selections → estimate mapping)
//! - Step sequencer (table-driven wizard state machine)
//! - Quote session (facade tying the pieces together)
//! - Gateway client (fire-and-forget submission to the relay)

pub mod catalog;
pub mod error;
pub mod gateway;
pub mod pricing;
pub mod selections;
pub mod sequencer;
pub mod session;

pub use catalog::{Branch, PriceCatalog};
pub use error::{Error, Result};
pub use session::QuoteSession;
