//! Query string extractor with automatic validation using the validator crate.

use super::validated_json::validation_rejection;
use crate::errors::{ErrorCode, ErrorResponse};
use axum::{
    extract::{FromRequestParts, Query, rejection::QueryRejection},
    http::StatusCode,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query extractor with automatic validation.
///
/// Deserializes query parameters and validates them with the `validator`
/// crate before the handler runs, so out-of-range paging or filter values
/// never reach the service layer. Both failure modes render as 400 with the
/// structured [`ErrorResponse`] shape.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedQuery;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct Paging {
///     #[serde(default)]
///     skip: u64,
///     #[validate(range(min = 1, max = 100))]
///     limit: i64,
/// }
///
/// async fn list(ValidatedQuery(paging): ValidatedQuery<Paging>) { /* ... */ }
/// ```
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| query_rejection(&e))?;

        data.validate().map_err(|e| validation_rejection(&e))?;

        Ok(ValidatedQuery(data))
    }
}

/// Convert a query-string deserialization failure into a structured 400 response.
fn query_rejection(rejection: &QueryRejection) -> Response {
    let error_response = ErrorResponse {
        code: ErrorCode::ValidationError.code(),
        error: ErrorCode::ValidationError.as_str().to_string(),
        message: rejection.body_text(),
        details: None,
    };

    (StatusCode::BAD_REQUEST, axum::Json(error_response)).into_response()
}
