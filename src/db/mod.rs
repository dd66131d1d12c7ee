//! Database Module
//!
//! SQLite storage accessed through a single `Database` handle.
//!
//! # Ownership scoping
//!
//! Every query that touches user data takes the authenticated [`UserId`]
//! as a required argument and filters on it. A row owned by someone else
//! is therefore indistinguishable from a missing row: the caller gets
//! `None` (→ 404), never a "forbidden".
//!
//! Transactions have no owner column; their owner is resolved through
//! `debts.user_id` with an explicit join in each query.
//!
//! [`UserId`]: crate::types::UserId

mod contacts;
mod debts;
mod models;
mod transactions;
mod users;

pub use models::*;

use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// 데이터베이스 연결 및 쿼리 담당
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// 데이터베이스 연결
    ///
    /// # Connection Pool Settings
    ///
    /// - max_connections: 10 (in-memory DB는 1)
    /// - min_connections: 1 (idle 시 최소 유지)
    /// - acquire_timeout: 3초 (커넥션 획득 대기)
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // in-memory DB는 커넥션이 모두 닫히면 사라짐 → 단일 커넥션 유지
        let in_memory = database_url.contains(":memory:");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(10)
        };

        let pool = pool_options
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// 마이그레이션 실행 (이미 적용된 버전은 건너뜀)
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::memory_db;

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let db = memory_db().await;
        db.run_migrations().await.unwrap();
        db.health_check().await.unwrap();
    }
}
