//! Authentication Endpoints
//!
//! # Interview Q&A
//!
//! Q: 로그인 실패 시 "이메일 없음" 과 "비밀번호 틀림" 을 구분하지 않는 이유는?
//! A: 계정 존재 여부 노출 (user enumeration) 방지
//!    - 둘 다 401 "Invalid credentials"
//!    - 로그에는 debug 레벨로 원인 기록
//!
//! Q: 회원가입 직후 token 을 바로 발급하는 이유는?
//! A: 가입 후 별도 로그인 요청 없이 바로 API 사용 가능

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::{
    db::{NewUser, User},
    error::ApiError,
    middleware::AuthUser,
    AppState,
};

use super::{
    extract::ValidJson,
    validation::{is_valid_email, normalize_email, optional_text, required, MIN_PASSWORD_LEN},
};

// ============ Request/Response Types ============

/// 회원가입 요청
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
}

/// 로그인 요청
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// token + 사용자 정보 (password_hash 제외)
#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

// ============ Handlers ============

/// POST /api/v1/auth/register
///
/// # Flow
///
/// 1. 이메일 형식, 비밀번호 길이 (6자 이상), 이름 검증
/// 2. 이메일 중복 확인 → 409
/// 3. bcrypt 해시 (blocking pool)
/// 4. 사용자 저장 후 token 발급
pub async fn register(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let email = normalize_email(&req.email);
    if !is_valid_email(&email) {
        return Err(ApiError::ValidationError("Invalid email address".to_string()));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::ValidationError(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    let name = required(&req.name, "name")?;

    if state.db.find_user_by_email(&email).await?.is_some() {
        return Err(ApiError::Conflict("User already exists".to_string()));
    }

    let password_hash = state.credentials.hash_password(&req.password).await?;

    // 동시 가입 경쟁은 unique 제약으로 잡힘
    let user = state
        .db
        .insert_user(&NewUser {
            email,
            password_hash,
            name,
            phone: optional_text(req.phone),
        })
        .await
        .map_err(|e| ApiError::conflict_or_database(e, "User already exists"))?;

    let token = state.credentials.issue_token(user.id)?;
    tracing::info!(user_id = user.id.0, "User registered");

    Ok((StatusCode::CREATED, Json(AuthResponse { token, user })))
}

/// POST /api/v1/auth/login
///
/// 없는 이메일과 틀린 비밀번호 모두 동일한 401 "Invalid credentials"
pub async fn login(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let email = normalize_email(&req.email);
    if email.is_empty() || req.password.is_empty() {
        return Err(ApiError::ValidationError(
            "Email and password are required".to_string(),
        ));
    }

    let Some(user) = state.db.find_user_by_email(&email).await? else {
        tracing::debug!("Login failed: unknown email");
        return Err(ApiError::InvalidCredentials);
    };

    if !state
        .credentials
        .verify_password(&req.password, &user.password_hash)
        .await
    {
        tracing::debug!(user_id = user.id.0, "Login failed: wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.credentials.issue_token(user.id)?;
    tracing::info!(user_id = user.id.0, "User logged in");

    Ok(Json(AuthResponse { token, user }))
}

/// GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .db
        .find_user_by_id(user_id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(user))
}
