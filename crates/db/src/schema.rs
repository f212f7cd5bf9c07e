//! Startup schema reset for the `product` table.
//!
//! The table is dropped and recreated on every boot. There is no migration
//! history: the table definition below is the only source of truth.

use crate::DbPool;

/// Name of the single table managed by this service.
pub const PRODUCT_TABLE: &str = "product";

const CREATE_PRODUCT_TABLE: &str = "\
    CREATE TABLE product ( \
        id BIGSERIAL PRIMARY KEY, \
        name VARCHAR, \
        description TEXT, \
        brand VARCHAR, \
        category VARCHAR, \
        price NUMERIC, \
        currency VARCHAR, \
        stock INTEGER, \
        ean VARCHAR, \
        color VARCHAR, \
        size VARCHAR, \
        availability VARCHAR, \
        internal_id VARCHAR \
    )";

const CREATE_PRODUCT_ID_INDEX: &str = "CREATE INDEX idx_product_id ON product (id)";

/// Drop the `product` table if present and recreate it.
///
/// Runs in a single transaction. No foreign keys are declared, and `CASCADE`
/// removes anything that depended on the old table, so the reset never trips
/// over constraint checks. Any error is returned to the caller; there are no
/// retries.
pub async fn bootstrap(pool: &DbPool) -> Result<(), sqlx::Error> {
    let existed = table_exists(pool, PRODUCT_TABLE).await?;
    if existed {
        tracing::info!(table = PRODUCT_TABLE, "Dropping existing table");
    }

    let mut tx = pool.begin().await?;

    sqlx::query("DROP TABLE IF EXISTS product CASCADE")
        .execute(&mut *tx)
        .await?;
    sqlx::query(CREATE_PRODUCT_TABLE).execute(&mut *tx).await?;
    sqlx::query(CREATE_PRODUCT_ID_INDEX)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(table = PRODUCT_TABLE, recreated = existed, "Schema bootstrap complete");
    Ok(())
}

/// Whether a table with the given name exists in the current schema.
pub async fn table_exists(pool: &DbPool, table: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS ( \
             SELECT 1 FROM information_schema.tables \
             WHERE table_schema = current_schema() AND table_name::text = $1 \
         )",
    )
    .bind(table)
    .fetch_one(pool)
    .await
}
