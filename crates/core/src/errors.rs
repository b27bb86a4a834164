//! Core error types for the receipt points service.
//!
//! Scoring itself never fails; malformed receipt fields degrade to zero
//! values inside the points engine. The only failure the core reports is
//! a lookup of an identifier that was never issued.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the receipt points core.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Receipt not found: {0}")]
    ReceiptNotFound(String),
}
