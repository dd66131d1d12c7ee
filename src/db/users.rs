//! User queries (이메일은 소문자로 정규화된 값으로 저장/조회)

use chrono::Utc;

use super::{Database, NewUser, User};
use crate::types::UserId;

const USER_COLUMNS: &str = "id, email, password_hash, name, phone, created_at, updated_at";

impl Database {
    /// 이메일로 사용자 조회 (email은 호출 측에서 정규화)
    pub async fn find_user_by_email(&self, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_user_by_id(&self, id: UserId) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// 사용자 생성 후 다시 조회
    ///
    /// 중복 이메일이면 unique violation 에러 그대로 반환
    pub async fn insert_user(&self, user: &NewUser) -> sqlx::Result<User> {
        let now = Utc::now();
        let id = sqlx::query(
            r#"
            INSERT INTO users (email, password_hash, name, phone, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(&user.phone)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        self.find_user_by_id(UserId(id))
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }
}
