//! Request extractors
//!
//! Thin wrappers over axum's `Json` and `Path` whose rejections become
//! [`ApiError`] (400 with the usual `{"error": ...}` body) instead of
//! axum's default 415/422 plain-text responses.

use axum::extract::{FromRequest, FromRequestParts};
use serde::Deserialize;

use crate::error::ApiError;

/// JSON body (문법 오류, 누락 필드, 잘못된 enum → 400)
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ValidJson<T>(pub T);

/// 숫자 path id (`/contacts/:id` 등)
///
/// `Path<IdPath>` 로 추출되므로 i64 그대로 역직렬화 (transparent)
#[derive(Debug, Deserialize, FromRequestParts)]
#[serde(transparent)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct IdPath(pub i64);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    async fn echo_id(IdPath(id): IdPath) -> String {
        id.to_string()
    }

    async fn call(uri: &str) -> (StatusCode, String) {
        let app = Router::new().route("/items/:id", get(echo_id));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_id_path_numeric() {
        assert_eq!(call("/items/42").await, (StatusCode::OK, "42".to_string()));
    }

    #[tokio::test]
    async fn test_id_path_rejects_non_numeric() {
        let (status, body) = call("/items/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"Invalid ID"}"#);
    }
}
