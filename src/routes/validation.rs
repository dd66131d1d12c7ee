//! Input validation helpers shared by the handlers.

use crate::error::ApiError;

/// 최소 비밀번호 길이 (문자 수)
pub const MIN_PASSWORD_LEN: usize = 6;

/// 이메일 정규화 (앞뒤 공백 제거 + 소문자)
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 간단한 이메일 형식 검증: `local@domain.tld`, 공백 없음
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

/// 필수 텍스트 필드 (trim 후 비어 있으면 400)
pub fn required(value: &str, field: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::ValidationError(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// 선택 텍스트 필드: 비어 있으면 NULL로 저장
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
