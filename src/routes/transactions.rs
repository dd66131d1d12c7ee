//! Transaction Endpoints
//!
//! 사용자 부채에 대한 거래 기록. 생성 후 수정 불가, 삭제는 hard delete.

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Deserialize;

use crate::{
    db::{NewTransaction, Transaction, TransactionType},
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

/// 거래 생성 요청
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    pub debt_id: i64,
    pub amount: Money,
    pub transaction_type: TransactionType,
    pub description: Option<String>,
}

// ============ Handlers ============

/// GET /api/v1/transactions
///
/// 사용자 부채에 속한 모든 거래 (최신순)
pub async fn list_transactions(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    Ok(Json(state.db.list_transactions(user_id).await?))
}

/// POST /api/v1/transactions
///
/// # Flow
///
/// 1. amount > 0 확인
/// 2. debt_id 가 사용자 소유인지 확인 (아니면 400)
/// 3. 저장 후 생성된 거래 반환
///
/// 부채의 amount 는 갱신하지 않음
pub async fn create_transaction(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    ValidJson(req): ValidJson<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    if !req.amount.is_positive() {
        return Err(ApiError::ValidationError(
            "Amount must be greater than zero".to_string(),
        ));
    }

    if !state.db.owns_debt(user_id, req.debt_id).await? {
        return Err(ApiError::BadRequest("Debt not found".to_string()));
    }

    let transaction = state
        .db
        .insert_transaction(
            user_id,
            &NewTransaction {
                debt_id: req.debt_id,
                amount: req.amount,
                transaction_type: req.transaction_type,
                description: optional_text(req.description),
            },
        )
        .await?
        .ok_or_else(|| ApiError::BadRequest("Debt not found".to_string()))?;

    tracing::info!(
        user_id = user_id.0,
        debt_id = transaction.debt_id,
        transaction_id = transaction.id,
        transaction_type = ?transaction.transaction_type,
        "Transaction recorded"
    );
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// GET /api/v1/transactions/:id
pub async fn get_transaction(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    IdPath(id): IdPath,
) -> Result<Json<Transaction>, ApiError> {
    state
        .db
        .find_transaction(user_id, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Transaction"))
}

/// DELETE /api/v1/transactions/:id
///
/// Hard delete (되돌릴 수 없음)
pub async fn delete_transaction(
    State(state): State<AppState>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    IdPath(id): IdPath,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.db.delete_transaction(user_id, id).await? {
        return Err(ApiError::NotFound("Transaction"));
    }

    tracing::info!(user_id = user_id.0, transaction_id = id, "Transaction deleted");
    Ok(Json(MessageResponse::new("Transaction deleted successfully")))
}
