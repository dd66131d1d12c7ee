//! Transaction queries
//!
//! transactions 테이블에는 user_id 가 없음. 소유자는 부채의 owner 이므로
//! 모든 쿼리가 `debts` 를 join 해서 확인함. 삭제는 hard delete.

use chrono::Utc;

use super::{Database, NewTransaction, Transaction};
use crate::types::UserId;

impl Database {
    /// owner의 모든 거래 (최신순)
    pub async fn list_transactions(&self, owner: UserId) -> sqlx::Result<Vec<Transaction>> {
        sqlx::query_as::<_, Transaction>(
            r#"
            SELECT t.id, t.debt_id, t.amount_cents, t.transaction_type, t.description, t.created_at
            FROM transactions t
            JOIN debts d ON t.debt_id = d.id
            WHERE d.user_id = ?
            ORDER BY t.created_at DESC, t.id DESC
            "#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await
    }

    /// 특정 부채의 거래 (최신순)
    pub async fn list_debt_transactions(
        &self,
        owner: UserId,
        debt_id: i64,
    ) -> sqlx::Result<Vec<Transaction>> {
        sqlx::query_as::<_, Transaction>(
            r#"
            SELECT t.id, t.debt_id, t.amount_cents, t.transaction_type, t.description, t.created_at
            FROM transactions t
            JOIN debts d ON t.debt_id = d.id
            WHERE t.debt_id = ? AND d.user_id = ?
            ORDER BY t.created_at DESC, t.id DESC
            "#,
        )
        .bind(debt_id)
        .bind(owner)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_transaction(
        &self,
        owner: UserId,
        id: i64,
    ) -> sqlx::Result<Option<Transaction>> {
        sqlx::query_as::<_, Transaction>(
            r#"
            SELECT t.id, t.debt_id, t.amount_cents, t.transaction_type, t.description, t.created_at
            FROM transactions t
            JOIN debts d ON t.debt_id = d.id
            WHERE t.id = ? AND d.user_id = ?
            "#,
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await
    }

    /// 거래 생성
    ///
    /// INSERT ... SELECT 로 부채 소유자를 함께 확인: 소유하지 않은 부채면 `None`
    /// 부채 금액은 변경하지 않음
    pub async fn insert_transaction(
        &self,
        owner: UserId,
        transaction: &NewTransaction,
    ) -> sqlx::Result<Option<Transaction>> {
        let result = sqlx::query(
            r#"
            INSERT INTO transactions (debt_id, amount_cents, transaction_type, description, created_at)
            SELECT d.id, ?, ?, ?, ?
            FROM debts d
            WHERE d.id = ? AND d.user_id = ?
            "#,
        )
        .bind(transaction.amount)
        .bind(transaction.transaction_type)
        .bind(&transaction.description)
        .bind(Utc::now())
        .bind(transaction.debt_id)
        .bind(owner)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_transaction(owner, result.last_insert_rowid()).await
    }

    /// Hard delete. 소유하지 않았거나 없으면 false
    pub async fn delete_transaction(&self, owner: UserId, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM transactions
            WHERE id = ? AND debt_id IN (SELECT id FROM debts WHERE user_id = ?)
            "#,
        )
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
