//! Contact Endpoints
//!
//! 사용자 본인의 연락처 CRUD. 삭제는 soft delete (is_active = false)
//! 이며, 삭제된 연락처는 조회/수정/삭제 모두 404.

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Deserialize;

use crate::{
    db::{Contact, ContactFields},
    error::ApiError,
    middleware::AuthUser,
    types::MessageResponse,
    AppState,
};

use super::{
    extract::{IdPath, ValidJson},
    validation::{is_valid_email, optional_text, required},
};

const DUPLICATE_PHONE: &str = "Contact with this phone already exists";

// ============ Request Types ============

/// 연락처 생성/수정 요청
///
/// 수정은 전체 덮어쓰기: 빠진 phone/email 은 NULL 이 됨
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactRequest {
    fn into_fields(self) -> Result<ContactFields, ApiError> {
        let name = required(&self.name, "name")?;
        let email = optional_text(self.email);
        if let Some(email) = &email {
            if !is_valid_email(email) {
                return Err(ApiError::ValidationError("Invalid email address".to_string()));
            }
        }

        Ok(ContactFields {
            name,
            phone: optional_text(self.phone),
            email,
        })
    }
}

// ============ Handlers ============

/// GET /api/v1/contacts
///
/// 활성 연락처 목록 (이름순)
pub async fn list_contacts(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    Ok(Json(state.db.list_contacts(user_id).await?))
}

/// POST /api/v1/contacts
pub async fn create_contact(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    ValidJson(req): ValidJson<ContactRequest>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let fields = req.into_fields()?;

    let contact = state
        .db
        .insert_contact(user_id, &fields)
        .await
        .map_err(|e| ApiError::conflict_or_database(e, DUPLICATE_PHONE))?;

    tracing::info!(user_id = user_id.0, contact_id = contact.id, "Contact created");
    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /api/v1/contacts/:id
pub async fn get_contact(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    IdPath(id): IdPath,
) -> Result<Json<Contact>, ApiError> {
    state
        .db
        .find_contact(user_id, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Contact"))
}

/// PUT /api/v1/contacts/:id
pub async fn update_contact(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    IdPath(id): IdPath,
    ValidJson(req): ValidJson<ContactRequest>,
) -> Result<Json<Contact>, ApiError> {
    let fields = req.into_fields()?;

    state
        .db
        .update_contact(user_id, id, &fields)
        .await
        .map_err(|e| ApiError::conflict_or_database(e, DUPLICATE_PHONE))?
        .map(Json)
        .ok_or(ApiError::NotFound("Contact"))
}

/// DELETE /api/v1/contacts/:id
///
/// Soft delete: 이 연락처를 참조하는 부채는 그대로 유지
pub async fn delete_contact(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    IdPath(id): IdPath,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.db.deactivate_contact(user_id, id).await? {
        return Err(ApiError::NotFound("Contact"));
    }

    tracing::info!(user_id = user_id.0, contact_id = id, "Contact deactivated");
    Ok(Json(MessageResponse::new("Contact deleted successfully")))
}
