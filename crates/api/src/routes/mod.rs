pub mod basic;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /plain-text                 plain-text smoke test
/// /json                       JSON smoke test
/// /fortune                    HTML listing of up to 100 products
///
/// /products                   list, create
/// /products/{id}              get, update, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(basic::router())
        .nest("/products", product::router())
}
