//! Repository for the `product` table.

use prodbench_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{NewProduct, Product, ProductFields};

/// Column list shared across queries to avoid repetition.
///
/// `price` is stored as NUMERIC and read back as float8 so it decodes
/// straight into `f64`. It is written as text (see [`price_text`]) because a
/// float8-to-numeric cast keeps only 15 significant digits.
const COLUMNS: &str = "id, name, description, brand, category, price::float8 AS price, \
     currency, stock, ean, color, size, availability, internal_id";

/// Shortest decimal text that reads back as exactly `price`.
fn price_text(price: f64) -> String {
    price.to_string()
}

/// Provides the CRUD operations for products. Every method is a single
/// statement; there are no multi-row transactions.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &NewProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO product (name, description, brand, category, price, currency, stock, \
                                  ean, color, size, availability, internal_id)
             VALUES ($1, $2, $3, $4, $5::text::numeric, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.brand)
            .bind(&input.category)
            .bind(price_text(input.price))
            .bind(&input.currency)
            .bind(input.stock)
            .bind(&input.ean)
            .bind(&input.color)
            .bind(&input.size)
            .bind(&input.availability)
            .bind(&input.internal_id)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a page of products in storage order (no `ORDER BY`).
    ///
    /// Callers are expected to have resolved defaults and clamped negatives
    /// via `prodbench_core::pagination`.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Product>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a product. Only `Some` fields in `fields` are applied.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        fields: &ProductFields,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE product SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                brand = COALESCE($4, brand),
                category = COALESCE($5, category),
                price = COALESCE($6::text::numeric, price),
                currency = COALESCE($7, currency),
                stock = COALESCE($8, stock),
                ean = COALESCE($9, ean),
                color = COALESCE($10, color),
                size = COALESCE($11, size),
                availability = COALESCE($12, availability),
                internal_id = COALESCE($13, internal_id)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(&fields.brand)
        .bind(&fields.category)
        .bind(fields.price.map(price_text))
        .bind(&fields.currency)
        .bind(fields.stock)
        .bind(&fields.ean)
        .bind(&fields.color)
        .bind(&fields.size)
        .bind(&fields.availability)
        .bind(&fields.internal_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a product by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
