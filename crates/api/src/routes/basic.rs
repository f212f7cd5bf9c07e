use axum::routing::get;
use axum::Router;

use crate::handlers::basic;
use crate::state::AppState;

/// Smoke-test and listing-page routes, mounted at the root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/plain-text", get(basic::plain_text))
        .route("/json", get(basic::json_message))
        .route("/fortune", get(basic::fortune))
}
