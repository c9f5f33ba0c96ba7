//! Repository structs, one per table, exposing async query functions over `&PgPool`.

mod product_repo;

pub use product_repo::ProductRepo;
