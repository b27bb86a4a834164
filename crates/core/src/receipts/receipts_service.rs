use log::debug;
use std::sync::Arc;

use crate::errors::{Error, Result};
use crate::points::PointsBreakdown;
use crate::receipts::receipts_model::{ProcessedReceipt, Receipt, ReceiptPoints};
use crate::receipts::receipts_traits::{ReceiptRepositoryTrait, ReceiptServiceTrait};

/// Service for storing receipts and scoring them on demand.
pub struct ReceiptService {
    repository: Arc<dyn ReceiptRepositoryTrait>,
}

impl ReceiptService {
    pub fn new(repository: Arc<dyn ReceiptRepositoryTrait>) -> Self {
        ReceiptService { repository }
    }
}

impl ReceiptServiceTrait for ReceiptService {
    fn process_receipt(&self, receipt: Receipt) -> ProcessedReceipt {
        let id = self.repository.insert(receipt);
        debug!("Stored receipt {}", id);
        ProcessedReceipt { id }
    }

    /// Points are recomputed from the stored receipt on every call.
    fn get_points(&self, receipt_id: &str) -> Result<ReceiptPoints> {
        let receipt = self
            .repository
            .get(receipt_id)
            .ok_or_else(|| Error::ReceiptNotFound(receipt_id.to_string()))?;

        let breakdown = PointsBreakdown::for_receipt(&receipt);
        debug!("Points for receipt {}: {:?}", receipt_id, breakdown);

        Ok(ReceiptPoints {
            points: breakdown.total(),
        })
    }
}
