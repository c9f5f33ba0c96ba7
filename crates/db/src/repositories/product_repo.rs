//! Repository for the `products` table.

use catalog_core::pagination::Window;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{Product, ProductInput};

/// Column list shared across queries. `price` is stored as NUMERIC(10,2)
/// and read back as a float for JSON.
const COLUMNS: &str = "id, name, price::float8 AS price";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the id assigned by the sequence.
    pub async fn create(pool: &PgPool, input: &ProductInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO products (name, price) VALUES ($1, $2::numeric) RETURNING id",
        )
        .bind(&input.name)
        .bind(input.price)
        .fetch_one(pool)
        .await
    }

    /// Find a product by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List up to `window.count` products after skipping `window.start` rows.
    ///
    /// No ORDER BY: rows come back in whatever order the table scan yields.
    pub async fn list_range(pool: &PgPool, window: Window) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Product>(&query)
            .bind(window.count)
            .bind(window.start)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the name and price of a product.
    ///
    /// The affected row count is not inspected, so an unknown `id` is not
    /// an error.
    pub async fn update(pool: &PgPool, id: DbId, input: &ProductInput) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE products SET name = $2, price = $3::numeric WHERE id = $1")
            .bind(id)
            .bind(&input.name)
            .bind(input.price)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Permanently delete a product. Deleting an absent row succeeds.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
