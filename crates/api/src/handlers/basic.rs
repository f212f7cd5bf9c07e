//! Smoke-test endpoints and the HTML listing page.

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use prodbench_db::repositories::ProductRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::html::render_fortune;
use crate::state::AppState;

/// Number of products shown on the `/fortune` page.
pub const FORTUNE_LIMIT: i64 = 100;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /plain-text
pub async fn plain_text() -> &'static str {
    "Hello, world!"
}

/// GET /json
pub async fn json_message() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello, world from JSON serialization endpoint!",
    })
}

/// GET /fortune
pub async fn fortune(State(state): State<AppState>) -> AppResult<Html<String>> {
    let products = ProductRepo::list(&state.pool, FORTUNE_LIMIT, 0).await?;
    Ok(Html(render_fortune(&products)))
}
