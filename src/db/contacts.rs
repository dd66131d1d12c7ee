//! Contact queries
//!
//! 활성 연락처만 조회 대상. 삭제 시 `is_active` 만 false 로 바꾸고
//! 해당 연락처를 참조하는 부채는 그대로 둠.

use chrono::Utc;

use super::{Contact, ContactFields, Database};
use crate::types::UserId;

const CONTACT_COLUMNS: &str =
    "id, user_id, name, phone, email, is_active, created_at, updated_at";

impl Database {
    /// 활성 연락처 목록 (이름 오름차순)
    pub async fn list_contacts(&self, owner: UserId) -> sqlx::Result<Vec<Contact>> {
        sqlx::query_as::<_, Contact>(&format!(
            r#"
            SELECT {CONTACT_COLUMNS}
            FROM contacts
            WHERE user_id = ? AND is_active = 1
            ORDER BY name ASC, id ASC
            "#
        ))
        .bind(owner)
        .fetch_all(&self.pool)
        .await
    }

    /// (id, owner) 로 활성 연락처 조회
    pub async fn find_contact(&self, owner: UserId, id: i64) -> sqlx::Result<Option<Contact>> {
        sqlx::query_as::<_, Contact>(&format!(
            r#"
            SELECT {CONTACT_COLUMNS}
            FROM contacts
            WHERE id = ? AND user_id = ? AND is_active = 1
            "#
        ))
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await
    }

    /// 연락처 생성
    ///
    /// (user_id, phone) 중복이면 unique violation 에러 그대로 반환
    pub async fn insert_contact(
        &self,
        owner: UserId,
        fields: &ContactFields,
    ) -> sqlx::Result<Contact> {
        let now = Utc::now();
        let id = sqlx::query(
            r#"
            INSERT INTO contacts (user_id, name, phone, email, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(owner)
        .bind(&fields.name)
        .bind(&fields.phone)
        .bind(&fields.email)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        self.find_contact(owner, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// 전체 필드 덮어쓰기 (부분 수정 없음)
    ///
    /// 대상이 없거나 다른 사용자 소유면 `None`
    pub async fn update_contact(
        &self,
        owner: UserId,
        id: i64,
        fields: &ContactFields,
    ) -> sqlx::Result<Option<Contact>> {
        let result = sqlx::query(
            r#"
            UPDATE contacts
            SET name = ?, phone = ?, email = ?, updated_at = ?
            WHERE id = ? AND user_id = ? AND is_active = 1
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.phone)
        .bind(&fields.email)
        .bind(Utc::now())
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_contact(owner, id).await
    }

    /// Soft delete (is_active = 0). 변경된 행이 있으면 true
    pub async fn deactivate_contact(&self, owner: UserId, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE contacts
            SET is_active = 0, updated_at = ?
            WHERE id = ? AND user_id = ? AND is_active = 1
            "#,
        )
        .bind(Utc::now())
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{memory_db, seed_user};

    fn fields(name: &str, phone: Option<&str>) -> ContactFields {
        ContactFields {
            name: name.to_string(),
            phone: phone.map(str::to_string),
            email: None,
        }
    }

    #[tokio::test]
    async fn test_list_is_scoped_and_sorted() {
        let db = memory_db().await;
        let alice = seed_user(&db, "alice@example.com").await;
        let bob = seed_user(&db, "bob@example.com").await;

        db.insert_contact(alice, &fields("Zed", None)).await.unwrap();
        db.insert_contact(alice, &fields("Anna", None)).await.unwrap();
        db.insert_contact(bob, &fields("Bob's friend", None)).await.unwrap();

        let names: Vec<String> = db
            .list_contacts(alice)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Anna", "Zed"]);
    }

    #[tokio::test]
    async fn test_foreign_contact_is_invisible() {
        let db = memory_db().await;
        let alice = seed_user(&db, "alice@example.com").await;
        let bob = seed_user(&db, "bob@example.com").await;

        let contact = db.insert_contact(alice, &fields("Anna", None)).await.unwrap();

        assert!(db.find_contact(bob, contact.id).await.unwrap().is_none());
        assert!(db
            .update_contact(bob, contact.id, &fields("Hijack", None))
            .await
            .unwrap()
            .is_none());
        assert!(!db.deactivate_contact(bob, contact.id).await.unwrap());
        assert!(db.find_contact(alice, contact.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_phone_unique_per_user_only_when_present() {
        let db = memory_db().await;
        let alice = seed_user(&db, "alice@example.com").await;
        let bob = seed_user(&db, "bob@example.com").await;

        db.insert_contact(alice, &fields("A", Some("555-0100"))).await.unwrap();
        db.insert_contact(bob, &fields("B", Some("555-0100"))).await.unwrap();
        db.insert_contact(alice, &fields("C", None)).await.unwrap();
        db.insert_contact(alice, &fields("D", None)).await.unwrap();

        let err = db
            .insert_contact(alice, &fields("E", Some("555-0100")))
            .await
            .unwrap_err();
        assert!(err.as_database_error().unwrap().is_unique_violation());
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let db = memory_db().await;
        let alice = seed_user(&db, "alice@example.com").await;
        let contact = db
            .insert_contact(
                alice,
                &ContactFields {
                    name: "Anna".to_string(),
                    phone: Some("555-0101".to_string()),
                    email: Some("anna@example.com".to_string()),
                },
            )
            .await
            .unwrap();

        let updated = db
            .update_contact(alice, contact.id, &fields("Anna B.", None))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Anna B.");
        assert_eq!(updated.phone, None);
        assert_eq!(updated.email, None);
        assert!(updated.updated_at >= contact.updated_at);
    }

    #[tokio::test]
    async fn test_deactivate_hides_contact() {
        let db = memory_db().await;
        let alice = seed_user(&db, "alice@example.com").await;
        let contact = db.insert_contact(alice, &fields("Anna", None)).await.unwrap();

        assert!(db.deactivate_contact(alice, contact.id).await.unwrap());
        assert!(db.find_contact(alice, contact.id).await.unwrap().is_none());
        assert!(db.list_contacts(alice).await.unwrap().is_empty());
        // 두 번째 삭제는 대상 없음
        assert!(!db.deactivate_contact(alice, contact.id).await.unwrap());
    }
}
