//! Debt queries
//!
//! # Interview Q&A
//!
//! Q: 부채 삭제 후에도 id 로 조회 가능한 이유는?
//! A: 삭제는 `status = 'removed'` 로 바꾸는 soft delete
//!    - 목록 (`list_active_debts`) 에서는 제외
//!    - 단건 조회와 거래 내역은 그대로 유지
//!    - PUT 으로 status 를 active 로 되돌리면 재활성화
//!
//! Q: 금액을 왜 정수 cent 로 저장하는가?
//! A: SQLite 에는 decimal 타입이 없음
//!    - REAL 로 저장하면 0.1 + 0.2 같은 오차 누적
//!    - `amount_cents INTEGER` + API 경계에서만 소수 변환

use chrono::Utc;

use super::{Database, Debt, DebtStatus, DebtSummary, DebtUpdate, NewDebt};
use crate::types::{Money, UserId};

const DEBT_SELECT: &str = r#"
    SELECT d.id, d.user_id, d.contact_id, d.amount_cents, d.direction, d.status,
           d.description, d.created_at, d.updated_at,
           c.name AS contact_name, c.phone AS contact_phone, c.email AS contact_email
    FROM debts d
    JOIN contacts c ON d.contact_id = c.id
"#;

impl Database {
    /// 활성 부채 목록 (최신순)
    pub async fn list_active_debts(&self, owner: UserId) -> sqlx::Result<Vec<Debt>> {
        sqlx::query_as::<_, Debt>(&format!(
            "{DEBT_SELECT} WHERE d.user_id = ? AND d.status = ? ORDER BY d.created_at DESC, d.id DESC"
        ))
        .bind(owner)
        .bind(DebtStatus::Active)
        .fetch_all(&self.pool)
        .await
    }

    /// (id, owner) 로 조회. 상태와 무관 (removed 포함)
    pub async fn find_debt(&self, owner: UserId, id: i64) -> sqlx::Result<Option<Debt>> {
        sqlx::query_as::<_, Debt>(&format!("{DEBT_SELECT} WHERE d.id = ? AND d.user_id = ?"))
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
    }

    /// 부채 소유 여부 (거래 생성/조회 전 확인용)
    pub async fn owns_debt(&self, owner: UserId, id: i64) -> sqlx::Result<bool> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM debts WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// 부채 생성 (status = active)
    ///
    /// 연락처가 owner 소유의 활성 연락처인지는 호출 측에서 먼저 확인
    pub async fn insert_debt(&self, owner: UserId, debt: &NewDebt) -> sqlx::Result<Debt> {
        let now = Utc::now();
        let id = sqlx::query(
            r#"
            INSERT INTO debts (user_id, contact_id, amount_cents, direction, status, description, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(owner)
        .bind(debt.contact_id)
        .bind(debt.amount)
        .bind(debt.direction)
        .bind(DebtStatus::Active)
        .bind(&debt.description)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        self.find_debt(owner, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// amount / description / status 덮어쓰기
    ///
    /// 상태 전이 제한 없음 (removed → active 도 허용)
    pub async fn update_debt(
        &self,
        owner: UserId,
        id: i64,
        update: &DebtUpdate,
    ) -> sqlx::Result<Option<Debt>> {
        let result = sqlx::query(
            r#"
            UPDATE debts
            SET amount_cents = ?, description = ?, status = ?, updated_at = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(update.amount)
        .bind(&update.description)
        .bind(update.status)
        .bind(Utc::now())
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_debt(owner, id).await
    }

    /// Soft delete (status = removed). 대상이 있으면 true
    pub async fn remove_debt(&self, owner: UserId, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query(
            "UPDATE debts SET status = ?, updated_at = ? WHERE id = ? AND user_id = ?",
        )
        .bind(DebtStatus::Removed)
        .bind(Utc::now())
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// 활성 부채 집계 (단일 쿼리)
    ///
    /// SUM 은 i64 를 넘으면 "integer overflow" 에러를 내므로 TOTAL (REAL) 로
    /// 합산한 뒤 cents 로 포화 변환
    pub async fn debt_summary(&self, owner: UserId) -> sqlx::Result<DebtSummary> {
        let (owed_to, owed_from, active_count, contacts_count): (f64, f64, i64, i64) =
            sqlx::query_as(
                r#"
                SELECT
                    TOTAL(CASE WHEN direction = 'owe_to' AND status = 'active' THEN amount_cents ELSE 0 END),
                    TOTAL(CASE WHEN direction = 'owe_from' AND status = 'active' THEN amount_cents ELSE 0 END),
                    COUNT(CASE WHEN status = 'active' THEN 1 END),
                    COUNT(DISTINCT CASE WHEN status = 'active' THEN contact_id END)
                FROM debts
                WHERE user_id = ?
                "#,
            )
            .bind(owner)
            .fetch_one(&self.pool)
            .await?;

        let total_owed_to_others = Money::from_total_cents(owed_to);
        let total_owed_from_others = Money::from_total_cents(owed_from);

        Ok(DebtSummary {
            total_owed_to_others,
            total_owed_from_others,
            net_balance: total_owed_from_others - total_owed_to_others,
            active_debts_count: active_count,
            contacts_with_debts: contacts_count,
        })
    }
}
