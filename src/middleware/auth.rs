//! Authentication Gate
//!
//! 보호된 route 에 route_layer 로 적용. 유효한
//! `Authorization: Bearer <token>` 이 없으면 핸들러 실행 전에 401,
//! 통과하면 [`AuthUser`] 를 request extension 에 저장.
//!
//! # Interview Q&A
//!
//! Q: extractor 대신 middleware 로 구현한 이유는?
//! A: 인증 누락 방지
//!    - 핸들러마다 extractor 를 붙이면 빠뜨릴 수 있음
//!    - route_layer 한 곳에서 보호 대상 전체에 적용

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::{error::ApiError, types::UserId, AppState};

/// 인증된 사용자 (핸들러에서 `Extension<AuthUser>`로 꺼냄)
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub UserId);

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers()).ok_or(ApiError::Unauthorized)?;

    let user_id = state.credentials.verify_token(token).map_err(|e| {
        tracing::debug!("Rejected bearer token: {:#}", e);
        ApiError::InvalidToken
    })?;

    request.extensions_mut().insert(AuthUser(user_id));
    Ok(next.run(request).await)
}

/// `Authorization: Bearer <token>` 에서 token 추출 (scheme 대소문자 무시)
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}
