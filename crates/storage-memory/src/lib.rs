//! In-memory storage implementation for the receipt points service.
//!
//! Implements the repository traits defined in `receipt-points-core`.
//! Nothing is persisted: receipts live until the process exits.

pub mod receipts;

pub use receipts::InMemoryReceiptRepository;
