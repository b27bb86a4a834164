use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use receipt_points_core::receipts::{ProcessedReceipt, Receipt, ReceiptPoints};

/// Stores a receipt and returns its new identifier.
///
/// The body is decoded as JSON whatever its `Content-Type`.
async fn process_receipt(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<ProcessedReceipt>> {
    let receipt: Receipt = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("Rejected malformed receipt: {}", e);
        ApiError::BadRequest("Invalid request".to_string())
    })?;
    let processed = state.receipt_service.process_receipt(receipt);
    tracing::info!("Processed receipt {}", processed.id);
    Ok(Json(processed))
}

async fn get_receipt_points(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ReceiptPoints>> {
    let points = state.receipt_service.get_points(&id)?;
    Ok(Json(points))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_receipt_points))
}
