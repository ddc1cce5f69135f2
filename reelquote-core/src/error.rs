//! Common error types for ReelQuote

use thiserror::Error;

/// Common result type for ReelQuote operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the ReelQuote crates.
///
/// Incomplete steps and unknown catalog labels are not errors (the
/// gate just stays closed and unknown labels price as zero), so the
/// submission transport is the only failure source the library
/// surfaces.
#[derive(Error, Debug)]
pub enum Error {
    /// Submission transport error (wraps reqwest::Error)
    #[error("Submission error: {0}")]
    Submission(#[from] reqwest::Error),
}
