//! API Routes Module
//!
//! 모든 HTTP 엔드포인트 정의
//!
//! # Routes
//! - `/health` - 헬스 체크 (`/api/v1/health` 동일)
//! - `/api/v1/auth/*` - 회원가입, 로그인, 내 정보
//! - `/api/v1/contacts/*` - 연락처
//! - `/api/v1/debts/*` - 부채, 요약, 부채별 거래
//! - `/api/v1/transactions/*` - 거래

pub mod auth;
pub mod contacts;
pub mod debts;
pub mod extract;
pub mod health;
pub mod transactions;
pub mod validation;


use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::{config::Config, middleware::require_auth, AppState};

/// 라우터 생성
///
/// # Route Structure
///
/// ```text
/// GET    /health                          - 서버 상태 확인
///
/// POST   /api/v1/auth/register            - 회원가입
/// POST   /api/v1/auth/login               - 로그인
/// GET    /api/v1/auth/me                  - 내 정보            (auth)
///
/// GET    /api/v1/contacts                 - 연락처 목록         (auth)
/// POST   /api/v1/contacts                 - 연락처 생성         (auth)
/// GET    /api/v1/contacts/:id             - 연락처 조회         (auth)
/// PUT    /api/v1/contacts/:id             - 연락처 수정         (auth)
/// DELETE /api/v1/contacts/:id             - 연락처 삭제 (soft)  (auth)
///
/// GET    /api/v1/debts                    - 활성 부채 목록      (auth)
/// POST   /api/v1/debts                    - 부채 생성           (auth)
/// GET    /api/v1/debts/summary            - 부채 요약           (auth)
/// GET    /api/v1/debts/:id                - 부채 조회           (auth)
/// PUT    /api/v1/debts/:id                - 부채 수정           (auth)
/// DELETE /api/v1/debts/:id                - 부채 삭제 (soft)    (auth)
/// GET    /api/v1/debts/:id/transactions   - 부채별 거래         (auth)
///
/// GET    /api/v1/transactions             - 거래 목록           (auth)
/// POST   /api/v1/transactions             - 거래 생성           (auth)
/// GET    /api/v1/transactions/:id         - 거래 조회           (auth)
/// DELETE /api/v1/transactions/:id         - 거래 삭제 (hard)    (auth)
/// ```
pub fn create_router(state: AppState) -> Router {
    // 인증 게이트: route_layer 라서 매칭된 route 에만 적용
    let protected = Router::new()
        .route("/auth/me", get(auth::me))
        .route(
            "/contacts",
            get(contacts::list_contacts).post(contacts::create_contact),
        )
        .route(
            "/contacts/:id",
            get(contacts::get_contact)
                .put(contacts::update_contact)
                .delete(contacts::delete_contact),
        )
        .route("/debts", get(debts::list_debts).post(debts::create_debt))
        .route("/debts/summary", get(debts::get_debt_summary))
        .route(
            "/debts/:id",
            get(debts::get_debt)
                .put(debts::update_debt)
                .delete(debts::delete_debt),
        )
        .route("/debts/:id/transactions", get(debts::list_debt_transactions))
        .route(
            "/transactions",
            get(transactions::list_transactions).post(transactions::create_transaction),
        )
        .route(
            "/transactions/:id",
            get(transactions::get_transaction).delete(transactions::delete_transaction),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let api = Router::new()
        .route("/health", get(health::health_check))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .merge(protected);

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api)
        // 미들웨어
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config))
        // 상태 주입
        .with_state(state)
}

/// CORS 설정
///
/// - 프로덕션: ALLOWED_ORIGINS 에 나열된 origin 만 허용
/// - 개발: 모든 origin 허용
fn cors_layer(config: &Config) -> CorsLayer {
    if config.is_production() {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    } else {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
