//! Database Models
//!
//! Row types for the four tables plus the write-side inputs used by the
//! scoped queries. Monetary columns are stored in cents (`amount_cents`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::{Money, UserId};

// ============ Enums ============

/// 부채 방향
/// - owe_to: 사용자가 상대에게 갚아야 함
/// - owe_from: 상대가 사용자에게 갚아야 함
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Direction {
    OweTo,
    OweFrom,
}

/// 부채 상태 (removed = soft delete)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum DebtStatus {
    Active,
    Settled,
    Removed,
}

/// 거래 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum TransactionType {
    Lent,
    Borrowed,
    PaidBack,
    ReceivedBack,
}

// ============ Rows ============

/// 사용자
///
/// password_hash는 절대 응답으로 직렬화되지 않음
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 연락처 (is_active = false 이면 삭제된 것으로 취급)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Contact {
    pub id: i64,
    pub user_id: UserId,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 부채 응답에 포함되는 연락처 요약
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ContactSummary {
    #[sqlx(rename = "contact_id")]
    pub id: i64,
    #[sqlx(rename = "contact_name")]
    pub name: String,
    #[sqlx(rename = "contact_phone")]
    pub phone: Option<String>,
    #[sqlx(rename = "contact_email")]
    pub email: Option<String>,
}

/// 부채 (연락처 JOIN 결과 포함)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Debt {
    pub id: i64,
    pub user_id: UserId,
    pub contact_id: i64,
    #[sqlx(rename = "amount_cents")]
    pub amount: Money,
    pub direction: Direction,
    pub status: DebtStatus,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub contact: ContactSummary,
}

/// 거래 기록 (생성 후 수정 불가, 삭제는 hard delete)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Transaction {
    pub id: i64,
    pub debt_id: i64,
    #[sqlx(rename = "amount_cents")]
    pub amount: Money,
    pub transaction_type: TransactionType,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// 부채 요약 (저장하지 않고 매 요청마다 계산)
#[derive(Debug, Clone, Serialize)]
pub struct DebtSummary {
    pub total_owed_to_others: Money,
    pub total_owed_from_others: Money,
    /// owed_from - owed_to (양수면 사용자가 순채권자)
    pub net_balance: Money,
    pub active_debts_count: i64,
    pub contacts_with_debts: i64,
}

// ============ Write inputs ============

pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: Option<String>,
}

/// 연락처 생성/수정 필드 (수정은 전체 덮어쓰기)
pub struct ContactFields {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

pub struct NewDebt {
    pub contact_id: i64,
    pub amount: Money,
    pub direction: Direction,
    pub description: Option<String>,
}

pub struct DebtUpdate {
    pub amount: Money,
    pub description: Option<String>,
    pub status: DebtStatus,
}

pub struct NewTransaction {
    pub debt_id: i64,
    pub amount: Money,
    pub transaction_type: TransactionType,
    pub description: Option<String>,
}
