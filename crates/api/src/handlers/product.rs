//! Handlers for the `/product` and `/products` resources.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::pagination::WindowParams;
use catalog_db::models::product::{Product, ProductInput};
use catalog_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, ProductId};
use crate::response::ResultResponse;
use crate::state::AppState;

/// GET /products?start=&count=
///
/// Missing or unparsable parameters fall back to `start=0`, `count=10`.
/// A repeated key keeps its first value.
pub async fn list(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Vec<Product>>> {
    let window = pairs
        .map(|Query(pairs)| WindowParams::from_pairs(pairs).window())
        .unwrap_or_default();
    let products = ProductRepo::list_range(&state.pool, window).await?;
    Ok(Json(products))
}

/// POST /product
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ProductInput>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let id = ProductRepo::create(&state.pool, &input).await?;
    tracing::debug!(id, "Product created");
    Ok((StatusCode::CREATED, Json(Product::from_input(id, input))))
}

/// GET /product/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(product))
}

/// PUT /product/{id}
///
/// Echoes the submitted values under the path id without re-reading the
/// row, so an unknown id also answers 200.
pub async fn update(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    JsonBody(input): JsonBody<ProductInput>,
) -> AppResult<Json<Product>> {
    ProductRepo::update(&state.pool, id, &input).await?;
    Ok(Json(Product::from_input(id, input)))
}

/// DELETE /product/{id}
pub async fn delete(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<ResultResponse>> {
    ProductRepo::delete(&state.pool, id).await?;
    Ok(Json(ResultResponse::SUCCESS))
}

/// Any other method on /product/{id}.
///
/// The id is extracted first, so a non-numeric segment still gets the
/// unmatched-route 404 rather than a 405.
pub async fn method_not_allowed(ProductId(_): ProductId) -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}
