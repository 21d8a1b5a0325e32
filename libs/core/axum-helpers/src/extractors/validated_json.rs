//! JSON extractor with automatic validation using the validator crate.

use crate::errors::{ErrorCode, ErrorResponse};
use axum::{
    extract::{FromRequest, Json, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Validates the request body using the `validator` crate's `Validate` trait.
/// Malformed bodies and failed validations both render as 400 with the
/// structured [`ErrorResponse`] shape.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateTask {
///     #[validate(length(min = 3, max = 100))]
///     title: String,
///     #[validate(length(min = 3, max = 500))]
///     description: String,
/// }
///
/// async fn create_task(ValidatedJson(payload): ValidatedJson<CreateTask>) -> String {
///     format!("Creating task: {}", payload.title)
/// }
///
/// let app = Router::new().route("/tasks", post(create_task));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| json_rejection(&e))?;

        data.validate().map_err(|e| validation_rejection(&e))?;

        Ok(ValidatedJson(data))
    }
}

/// Convert a body extraction failure into a structured 400 response.
fn json_rejection(rejection: &JsonRejection) -> Response {
    let error_response = ErrorResponse {
        code: ErrorCode::JsonExtraction.code(),
        error: ErrorCode::JsonExtraction.as_str().to_string(),
        message: rejection.body_text(),
        details: None,
    };

    (StatusCode::BAD_REQUEST, axum::Json(error_response)).into_response()
}

/// Convert validator errors into a structured 400 response
/// (shared with [`super::validated_query`]).
pub(crate) fn validation_rejection(errors: &validator::ValidationErrors) -> Response {
    let details = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let error_messages: Vec<serde_json::Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::json!(error_messages))
        })
        .collect::<serde_json::Map<_, _>>();

    let error_response = ErrorResponse {
        code: ErrorCode::ValidationError.code(),
        error: ErrorCode::ValidationError.as_str().to_string(),
        message: ErrorCode::ValidationError.default_message().to_string(),
        details: Some(serde_json::Value::Object(details)),
    };

    (StatusCode::BAD_REQUEST, axum::Json(error_response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 3))]
        name: String,
    }

    fn app() -> Router {
        Router::new().route(
            "/",
            post(|ValidatedJson(p): ValidatedJson<Payload>| async move { p.name }),
        )
    }

    fn json_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_payload_passes() {
        let response = app()
            .oneshot(json_request(r#"{"name": "widget"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_validation_failure_returns_400_with_details() {
        let response = app()
            .oneshot(json_request(r#"{"name": "ab"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["details"]["name"].is_array());
    }

    #[tokio::test]
    async fn test_malformed_body_returns_400() {
        let response = app().oneshot(json_request("{")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "JSON_EXTRACTION");
    }

    #[tokio::test]
    async fn test_wrong_field_type_returns_400_not_422() {
        let response = app()
            .oneshot(json_request(r#"{"name": 42}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
