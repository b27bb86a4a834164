use crate::errors::Result;
use crate::receipts::receipts_model::{ProcessedReceipt, Receipt, ReceiptPoints};

/// Trait for receipt store operations.
///
/// Implementations must be safe to call from many request handlers at once.
pub trait ReceiptRepositoryTrait: Send + Sync {
    /// Stores the receipt under a freshly generated identifier and returns it.
    /// Never reuses or overwrites an existing identifier.
    fn insert(&self, receipt: Receipt) -> String;

    /// Resolves an identifier to its receipt, or `None` if it was never issued.
    fn get(&self, receipt_id: &str) -> Option<Receipt>;
}

/// Trait for receipt service operations
pub trait ReceiptServiceTrait: Send + Sync {
    fn process_receipt(&self, receipt: Receipt) -> ProcessedReceipt;
    fn get_points(&self, receipt_id: &str) -> Result<ReceiptPoints>;
}
