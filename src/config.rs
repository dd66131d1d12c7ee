//! Configuration Module
//!
//! 환경변수 기반 설정 (`.env` 는 main 에서 먼저 로드).
//!
//! # Interview Q&A
//!
//! Q: 설정 검증은 언제 하는가?
//! A: 시작 시점에 한 번
//!    - 잘못된 값이면 서버가 뜨지 않음 (fail fast)
//!    - production 에서 JWT_SECRET 누락 시 시작 실패

use std::env;

use anyhow::{bail, Context, Result};

/// 개발 환경 전용 서명 키 (production에서는 JWT_SECRET 필수)
const DEV_JWT_SECRET: &str = "debt-tracker-dev-secret-change-me";

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct Config {
    /// 서버 포트 (기본값: 8080)
    pub port: u16,

    /// SQLite 연결 문자열
    /// 형식: sqlite://path/to/file.db 또는 sqlite::memory:
    pub database_url: String,

    /// Bearer token 서명 키 (HS256)
    pub jwt_secret: String,

    /// bcrypt cost factor
    pub bcrypt_cost: u32,

    /// CORS 허용 origin 목록 (production에서만 사용)
    pub allowed_origins: Vec<String>,

    /// 환경 (development, staging, production)
    pub environment: Environment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Config {
    /// 환경변수에서 설정 로드
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 서버 포트 (기본값: 8080)
    /// - `DATABASE_URL`: SQLite 연결 문자열 (기본값: sqlite://debt_tracker.db)
    /// - `JWT_SECRET`: token 서명 키 (production 필수)
    /// - `ENVIRONMENT`: development | staging | production
    /// - `BCRYPT_COST`: 4..=31 (기본값: bcrypt::DEFAULT_COST)
    /// - `ALLOWED_ORIGINS`: 콤마로 구분된 origin 목록
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 lookup 함수로 설정 구성 (테스트에서 프로세스 환경 대신 사용)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment = match var("ENVIRONMENT")
            .unwrap_or_else(|| "development".to_string())
            .to_lowercase()
            .as_str()
        {
            "production" => Environment::Production,
            "staging" => Environment::Staging,
            _ => Environment::Development,
        };

        let port = match var("PORT") {
            Some(raw) => raw.parse().context("PORT must be a valid number")?,
            None => 8080,
        };

        let bcrypt_cost = match var("BCRYPT_COST") {
            Some(raw) => raw.parse().context("BCRYPT_COST must be a valid number")?,
            None => bcrypt::DEFAULT_COST,
        };
        if !(4..=31).contains(&bcrypt_cost) {
            bail!("BCRYPT_COST must be between 4 and 31, got {bcrypt_cost}");
        }

        let jwt_secret = match var("JWT_SECRET") {
            Some(secret) => secret,
            None if environment == Environment::Production => {
                bail!("JWT_SECRET must be set in production")
            }
            None => DEV_JWT_SECRET.to_string(),
        };

        let allowed_origins = var("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Config {
            port,
            database_url: var("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://debt_tracker.db".to_string()),
            jwt_secret,
            bcrypt_cost,
            allowed_origins,
            environment,
        })
    }

    /// 프로덕션 환경인지 확인
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
