//! Handlers for the `/products` resource.
//!
//! Write handlers take the raw body as bytes: parsing and numeric coercion
//! belong to `prodbench_core::product`, which also decides what counts as a
//! malformed request.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use prodbench_core::error::CoreError;
use prodbench_core::product::parse_object;
use prodbench_core::types::DbId;
use prodbench_db::models::product::{NewProduct, Product, ProductFields};
use prodbench_db::repositories::ProductRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::ProductId;
use crate::query::PaginationParams;
use crate::state::AppState;

/// Body returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Product",
        id,
    })
}

/// POST /products
///
/// Accepts any subset of product fields; `price` and `stock` may be sent as
/// numeric strings. Unparseable numeric strings store zero.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Product>)> {
    let raw = parse_object(&body)?;
    let input = NewProduct::from_json(&raw);
    let product = ProductRepo::create(&state.pool, &input).await?;
    tracing::debug!(id = product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(product))
}

/// GET /products?limit=&offset=
///
/// Defaults to the first 100 rows, in storage order. Missing, empty or
/// non-integer parameters use the defaults.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list(&state.pool, params.limit(), params.offset()).await?;
    Ok(Json(products))
}

/// PUT /products/{id}
///
/// Applies only the supplied fields. Existence is checked before the body
/// is parsed, so an unknown id is a 404 even with a malformed body. The
/// response is the fetched row with the fieldset merged in memory.
pub async fn update(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    body: Bytes,
) -> AppResult<Json<Product>> {
    let mut product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let raw = parse_object(&body)?;
    let fields = ProductFields::from_json(&raw);

    // The row can vanish between the fetch and the update.
    if !ProductRepo::update(&state.pool, id, &fields).await? {
        return Err(not_found(id));
    }

    fields.apply_to(&mut product);
    Ok(Json(product))
}

/// DELETE /products/{id}
///
/// Deleting an id that does not exist still succeeds.
pub async fn delete(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<DeleteResponse>> {
    let deleted = ProductRepo::delete(&state.pool, id).await?;
    tracing::debug!(id, deleted, "Product delete");
    Ok(Json(DeleteResponse { ok: true }))
}
