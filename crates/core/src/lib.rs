//! Receipt Points Core - domain models, the points engine, and store traits.
//!
//! This crate holds the business logic of the receipt points service.
//! It is storage-agnostic: the receipt store is described by
//! [`receipts::ReceiptRepositoryTrait`] and implemented elsewhere
//! (see the `storage-memory` crate).

pub mod errors;
pub mod points;
pub mod receipts;

pub use points::{calculate_points, PointsBreakdown};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
