//! Health Check Endpoint
//!
//! # Interview Q&A
//!
//! Q: DB 가 응답하지 않아도 200 을 반환하는 이유는?
//! A: 프로세스 생존과 서비스 가능 상태를 구분하기 위함
//!    - 200 + status "healthy": DB 까지 정상
//!    - 200 + status "degraded": 프로세스는 살아있지만 DB 장애
//!    - 모니터링 쪽에서 status 필드로 판단
//!
//! Q: `/health` 와 `/api/v1/health` 가 둘 다 있는 이유는?
//! A: 로드밸런서는 버전 없는 경로, 클라이언트는 API prefix 경로 사용

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// 서비스 이름 (health 응답에 포함)
pub const SERVICE_NAME: &str = "debt-tracker-api";

/// Health check 응답
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub database: DatabaseStatus,
}

#[derive(Serialize)]
pub struct DatabaseStatus {
    pub connected: bool,
    pub latency_ms: Option<u64>,
}

/// GET /health
///
/// 서버 및 DB 상태 확인
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    // DB 연결 테스트
    let db_start = std::time::Instant::now();
    let db_status = match state.db.health_check().await {
        Ok(_) => DatabaseStatus {
            connected: true,
            latency_ms: Some(db_start.elapsed().as_millis() as u64),
        },
        Err(e) => {
            tracing::warn!("Health check database probe failed: {:#}", e);
            DatabaseStatus {
                connected: false,
                latency_ms: None,
            }
        }
    };

    Json(HealthResponse {
        status: if db_status.connected { "healthy" } else { "degraded" }.to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    })
}
