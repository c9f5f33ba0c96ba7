//! Domain vocabulary shared by the repository and HTTP layers.
//!
//! Kept free of database and web dependencies so that both `catalog-db`
//! and `catalog-api` can depend on it.

pub mod error;
pub mod pagination;
pub mod types;
