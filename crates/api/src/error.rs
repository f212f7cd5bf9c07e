use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use prodbench_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and database errors from sqlx.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
///
/// Storage failures expose the underlying database message in the response
/// body. This service runs on a trusted network; do not carry that over to
/// anything internet-facing.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `prodbench_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A path id that is not an integer; no product can have it.
    #[error("Invalid product id: {0}")]
    InvalidId(String),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Message returned for every missing product.
pub const NOT_FOUND_MESSAGE: &str = "Product not found";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity = *entity, id = *id, "Entity not found");
                    (
                        StatusCode::NOT_FOUND,
                        "NOT_FOUND",
                        NOT_FOUND_MESSAGE.to_string(),
                    )
                }
                CoreError::MalformedRequest(msg) => {
                    (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone())
                }
            },

            AppError::InvalidId(raw) => {
                tracing::debug!(id = %raw, "Unparseable product id");
                (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    NOT_FOUND_MESSAGE.to_string(),
                )
            }

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 carrying the driver's message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            NOT_FOUND_MESSAGE.to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                other.to_string(),
            )
        }
    }
}
