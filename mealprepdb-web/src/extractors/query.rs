//! Validated query and body extraction.
//!
//! Malformed input (bad dates, unknown enum values, out-of-range limits,
//! broken JSON) is rejected with a 422 validation error before any handler
//! logic or database work runs.

use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::WebError;

/// Post-deserialization validation hook for query parameter structs.
pub trait Validate {
    fn validate(&self) -> Result<(), WebError>;
}

/// Query-string extractor that deserializes into `T` and runs its
/// [`Validate`] hook, rejecting failures as 422.
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|err| WebError::validation(format!("Invalid query parameters: {}", err)))?;

        value.validate()?;

        Ok(ValidatedQuery(value))
    }
}

/// JSON body extractor rejecting malformed payloads as 422.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| WebError::validation(format!("Invalid request body: {}", err)))?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, routing::get, Router};
    use mealprepdb_api_types::PageParams;
    use serde::Deserialize;
    use tower::ServiceExt;

    // offset/limit live directly on the params struct: serde_urlencoded
    // cannot deserialize numbers through #[serde(flatten)]
    #[derive(Debug, Deserialize)]
    struct TestParams {
        offset: Option<u64>,
        limit: Option<u64>,
        name: Option<String>,
    }

    impl TestParams {
        fn page(&self) -> PageParams {
            PageParams {
                offset: self.offset,
                limit: self.limit,
            }
        }
    }

    impl Validate for TestParams {
        fn validate(&self) -> Result<(), WebError> {
            self.page().validate()?;
            Ok(())
        }
    }

    async fn list_handler(ValidatedQuery(params): ValidatedQuery<TestParams>) -> String {
        let page = params.page();
        format!(
            "{}:{}:{}",
            page.offset(),
            page.limit(),
            params.name.unwrap_or_default()
        )
    }

    #[derive(Debug, Deserialize)]
    struct TestBody {
        name: String,
    }

    async fn create_handler(ValidatedJson(body): ValidatedJson<TestBody>) -> String {
        body.name
    }

    fn app() -> Router {
        Router::new().route("/items", get(list_handler).post(create_handler))
    }

    #[tokio::test]
    async fn test_query_defaults_and_passthrough() {
        let response = app()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/items?name=rice")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"0:1000:rice");
    }

    #[tokio::test]
    async fn test_out_of_range_limit_is_422() {
        let response = app()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/items?limit=2001")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_negative_offset_is_422() {
        let response = app()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/items?offset=-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_malformed_body_is_422() {
        let response = app()
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/items")
                    .header("content-type", "application/json")
                    .body(Body::from("{\"name\": 12"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
