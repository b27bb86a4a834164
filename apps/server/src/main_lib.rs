use std::sync::Arc;

use receipt_points_core::receipts::{ReceiptService, ReceiptServiceTrait};
use receipt_points_storage_memory::InMemoryReceiptRepository;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub receipt_service: Arc<dyn ReceiptServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("RP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Wires the receipt store and service. The store is in-memory, so every
/// call starts from an empty set of receipts.
pub fn build_state() -> Arc<AppState> {
    let receipt_repository = Arc::new(InMemoryReceiptRepository::new());
    let receipt_service = Arc::new(ReceiptService::new(receipt_repository));
    tracing::info!("Receipt store initialized (in-memory)");

    Arc::new(AppState { receipt_service })
}
