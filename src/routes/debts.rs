//! Debt Endpoints
//!
//! 부채는 사용자의 활성 연락처에 대해서만 생성되고, 응답에는 항상 연락처
//! 요약이 포함됨.
//!
//! # Interview Q&A
//!
//! Q: 상환 거래 (paid_back) 를 기록하면 부채 금액이 줄어드는가?
//! A: 아니오. 부채 amount 는 PUT 으로만 변경됨
//!    - 거래는 기록용 장부 (ledger)
//!    - 잔액 재계산은 사용자가 직접 수행
//!
//! Q: 다른 사용자의 contact_id 로 부채를 만들면?
//! A: 요청 body 의 참조값 오류이므로 404 가 아니라 400 "Contact not found"

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Deserialize;

use crate::{
    db::{Debt, DebtStatus, DebtSummary, DebtUpdate, Direction, NewDebt, Transaction},
    error::ApiError,
    middleware::AuthUser,
    types::{MessageResponse, Money},
    AppState,
};

use super::{
    extract::{IdPath, ValidJson},
    validation::optional_text,
};

// ============ Request Types ============

/// 부채 생성 요청
#[derive(Debug, Deserialize)]
pub struct CreateDebtRequest {
    pub contact_id: i64,
    pub amount: Money,
    pub direction: Direction,
    pub description: Option<String>,
}

/// 부채 수정 요청 (amount, description, status 덮어쓰기)
#[derive(Debug, Deserialize)]
pub struct UpdateDebtRequest {
    pub amount: Money,
    pub description: Option<String>,
    pub status: DebtStatus,
}

fn ensure_non_negative(amount: Money) -> Result<Money, ApiError> {
    if amount.is_negative() {
        return Err(ApiError::ValidationError(
            "Amount must not be negative".to_string(),
        ));
    }
    Ok(amount)
}

// ============ Handlers ============

/// GET /api/v1/debts
///
/// 활성 부채 목록 (최신순, 연락처 정보 포함)
pub async fn list_debts(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Json<Vec<Debt>>, ApiError> {
    Ok(Json(state.db.list_active_debts(user_id).await?))
}

/// POST /api/v1/debts
///
/// # Validation
///
/// contact_id 는 요청 값이므로, 없거나 비활성이거나 다른 사용자의 연락처면
/// 404가 아니라 400
pub async fn create_debt(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    ValidJson(req): ValidJson<CreateDebtRequest>,
) -> Result<(StatusCode, Json<Debt>), ApiError> {
    let amount = ensure_non_negative(req.amount)?;

    if state.db.find_contact(user_id, req.contact_id).await?.is_none() {
        return Err(ApiError::BadRequest("Contact not found".to_string()));
    }

    let debt = state
        .db
        .insert_debt(
            user_id,
            &NewDebt {
                contact_id: req.contact_id,
                amount,
                direction: req.direction,
                description: optional_text(req.description),
            },
        )
        .await?;

    tracing::info!(
        user_id = user_id.0,
        debt_id = debt.id,
        direction = ?debt.direction,
        "Debt created"
    );
    Ok((StatusCode::CREATED, Json(debt)))
}

/// GET /api/v1/debts/summary
pub async fn get_debt_summary(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Json<DebtSummary>, ApiError> {
    Ok(Json(state.db.debt_summary(user_id).await?))
}

/// GET /api/v1/debts/:id
///
/// removed 상태도 id 로는 조회 가능
pub async fn get_debt(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    IdPath(id): IdPath,
) -> Result<Json<Debt>, ApiError> {
    state
        .db
        .find_debt(user_id, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Debt"))
}

/// PUT /api/v1/debts/:id
///
/// 상태 전이 제한 없음 (removed → active 재활성화 포함)
pub async fn update_debt(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    IdPath(id): IdPath,
    ValidJson(req): ValidJson<UpdateDebtRequest>,
) -> Result<Json<Debt>, ApiError> {
    let update = DebtUpdate {
        amount: ensure_non_negative(req.amount)?,
        description: optional_text(req.description),
        status: req.status,
    };

    let debt = state
        .db
        .update_debt(user_id, id, &update)
        .await?
        .ok_or(ApiError::NotFound("Debt"))?;

    tracing::info!(user_id = user_id.0, debt_id = id, status = ?debt.status, "Debt updated");
    Ok(Json(debt))
}

/// DELETE /api/v1/debts/:id
///
/// Soft delete (status = removed)
pub async fn delete_debt(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    IdPath(id): IdPath,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.db.remove_debt(user_id, id).await? {
        return Err(ApiError::NotFound("Debt"));
    }

    tracing::info!(user_id = user_id.0, debt_id = id, "Debt removed");
    Ok(Json(MessageResponse::new("Debt deleted successfully")))
}

/// GET /api/v1/debts/:id/transactions
///
/// 부채 소유 여부를 먼저 확인한 뒤 거래 목록 (최신순)
pub async fn list_debt_transactions(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    IdPath(debt_id): IdPath,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    if !state.db.owns_debt(user_id, debt_id).await? {
        return Err(ApiError::NotFound("Debt"));
    }

    Ok(Json(state.db.list_debt_transactions(user_id, debt_id).await?))
}
