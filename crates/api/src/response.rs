//! JSON payloads that are not domain objects.
//!
//! Products and product lists are serialized directly with `axum::Json`;
//! the types here cover the `{"error": ..}` and `{"result": ..}` shapes.

use serde::Serialize;

/// Body of every failed response: `{"error": message}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Fixed success marker: `{"result": "success"}`.
#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub result: &'static str,
}

impl ResultResponse {
    pub const SUCCESS: Self = Self { result: "success" };
}
