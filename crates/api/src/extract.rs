//! Custom extractors for product routes.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use prodbench_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// The `{id}` segment of a `/products/{id}` route.
///
/// A segment that is not an integer can never name a stored product, so it
/// is rejected as not found with the usual JSON body instead of axum's
/// plain-text path rejection.
#[derive(Debug, Clone, Copy)]
pub struct ProductId(pub DbId);

impl FromRequestParts<AppState> for ProductId {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::InvalidId(rejection.body_text()))?;

        raw.parse::<DbId>()
            .map(ProductId)
            .map_err(|_| AppError::InvalidId(raw))
    }
}
