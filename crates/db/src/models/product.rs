//! Product entity model and DTOs.

use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub price: f64,
}

/// Request body for creating or replacing a product.
///
/// Both fields are required. Any `id` sent by the client is ignored: on
/// create the database assigns it, on update the path segment wins.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Combine a known id with submitted values, without touching storage.
    pub fn from_input(id: DbId, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
        }
    }
}
