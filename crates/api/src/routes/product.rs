//! Route definitions for the product resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Product routes, mounted at the root.
///
/// ```text
/// GET    /products        -> list
/// POST   /product         -> create
/// GET    /product/{id}    -> get_by_id
/// PUT    /product/{id}    -> update
/// DELETE /product/{id}    -> delete
/// *      /product/{id}    -> method_not_allowed
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(product::list))
        .route("/product", post(product::create))
        .route(
            "/product/{id}",
            get(product::get_by_id)
                .put(product::update)
                .delete(product::delete)
                .fallback(product::method_not_allowed),
        )
}
