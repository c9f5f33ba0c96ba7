//! Request extractors for product routes.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalog_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::{AppError, INVALID_PAYLOAD, INVALID_PRODUCT_ID};

/// Why an `{id}` path segment was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentError {
    /// Not `[0-9]+`; the route is treated as unmatched.
    NotNumeric,
    /// All digits, but too large for a [`DbId`].
    OutOfRange,
}

/// Classify a raw `{id}` segment.
pub fn parse_id_segment(segment: &str) -> Result<DbId, SegmentError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SegmentError::NotNumeric);
    }
    segment.parse().map_err(|_| SegmentError::OutOfRange)
}

/// Numeric product id taken from the `{id}` path segment.
///
/// A non-numeric segment gets the same empty 404 as an unknown route. An
/// all-digit segment that overflows produces 400 "Invalid product ID".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub DbId);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND.into_response())?;

        match parse_id_segment(&segment) {
            Ok(id) => Ok(ProductId(id)),
            Err(SegmentError::NotNumeric) => Err(StatusCode::NOT_FOUND.into_response()),
            Err(SegmentError::OutOfRange) => {
                Err(AppError::BadRequest(INVALID_PRODUCT_ID.into()).into_response())
            }
        }
    }
}

/// JSON request body whose every decoding failure maps to 400
/// "Invalid request payload".
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                Err(AppError::BadRequest(INVALID_PAYLOAD.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_parse_to_id() {
        assert_eq!(parse_id_segment("1"), Ok(1));
        assert_eq!(parse_id_segment("007"), Ok(7));
        assert_eq!(parse_id_segment("9223372036854775807"), Ok(i64::MAX));
    }

    #[test]
    fn non_digits_do_not_match_route() {
        assert_eq!(parse_id_segment(""), Err(SegmentError::NotNumeric));
        assert_eq!(parse_id_segment("abc"), Err(SegmentError::NotNumeric));
        assert_eq!(parse_id_segment("-1"), Err(SegmentError::NotNumeric));
        assert_eq!(parse_id_segment("+1"), Err(SegmentError::NotNumeric));
        assert_eq!(parse_id_segment("1.5"), Err(SegmentError::NotNumeric));
    }

    #[test]
    fn overflowing_digits_are_out_of_range() {
        assert_eq!(
            parse_id_segment("9223372036854775808"),
            Err(SegmentError::OutOfRange)
        );
    }
}
