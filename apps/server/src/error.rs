use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use receipt_points_core::errors::Error as CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
}

/// Errors are returned as short plain-text bodies.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => match e {
                CoreError::ReceiptNotFound(_) => {
                    (StatusCode::NOT_FOUND, "Receipt not found".to_string())
                }
            },
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
        };
        (status, msg).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
