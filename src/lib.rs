//! Debt Tracker API Library
//!
//! # Overview
//!
//! 개인 부채 관리 REST API: 사용자는 연락처를 관리하고, 연락처별 부채
//! (빌려준 돈 / 빌린 돈)와 거래 내역 (대여, 상환)을 기록하며 잔액 요약을 조회함.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                          API                              │
//! │                                                           │
//! │  ┌─────────┐  ┌────────────┐  ┌──────────┐  ┌─────────┐  │
//! │  │ Routes  │─▶│ Middleware │  │ Services │  │  Types  │  │
//! │  └────┬────┘  │ (auth gate)│  │(creds)   │  └─────────┘  │
//! │       │       └────────────┘  └──────────┘               │
//! │       ▼                                                   │
//! │  ┌──────────────────────────────────────┐                 │
//! │  │ DB: owner-scoped queries (SQLite)    │                 │
//! │  └──────────────────────────────────────┘                 │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: 환경 설정 관리
//! - `error`: 에러 타입 및 처리
//! - `routes`: HTTP 엔드포인트 핸들러
//! - `middleware`: bearer token 인증 게이트
//! - `services`: 비밀번호 해시, token 발급/검증
//! - `db`: 데이터베이스 연동
//! - `types`: 공통 타입 정의
//!
//! ## Usage
//!
//! ```rust,ignore
//! use debt_tracker_api::{config::Config, db::Database, routes, AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let db = Database::connect(&config.database_url).await?;
//!     db.run_migrations().await?;
//!
//!     let app = routes::create_router(AppState::new(db, config));
//!     // ... 서버 시작
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use db::Database;
pub use error::ApiError;
pub use services::CredentialService;

/// 애플리케이션 상태
///
/// 시작 시점에 한 번 구성되어 모든 핸들러에 주입됨 (전역 변수 없음)
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub credentials: Arc<CredentialService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: Database, config: Config) -> Self {
        let credentials = CredentialService::new(&config.jwt_secret, config.bcrypt_cost);
        Self {
            db: Arc::new(db),
            credentials: Arc::new(credentials),
            config: Arc::new(config),
        }
    }
}
