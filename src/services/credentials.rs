//! Credential Service
//!
//! 비밀번호 해시 (bcrypt) 와 bearer token 서명 (HS256 JWT).
//!
//! # Interview Q&A
//!
//! Q: bcrypt 를 spawn_blocking 에서 실행하는 이유는?
//! A: cost 12 기준 해시 한 번에 수백 ms 소요
//!    - async worker thread 에서 실행하면 다른 요청이 멈춤
//!    - blocking pool 로 넘겨서 runtime 보호
//!
//! Q: token 에 무엇을 담는가?
//! A: user_id, iat, exp (7일). 서버 측 세션 저장 없음

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// Token 유효 기간 (일)
pub const TOKEN_TTL_DAYS: i64 = 7;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: UserId,
    /// 만료 시각 (unix timestamp)
    pub exp: i64,
    /// 발급 시각 (unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// `issued_at` 기준 7일 후 만료
    pub fn new(user_id: UserId, issued_at: chrono::DateTime<Utc>) -> Self {
        Self {
            user_id,
            exp: (issued_at + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
            iat: issued_at.timestamp(),
        }
    }
}

/// 비밀번호 해시 + token 발급/검증
pub struct CredentialService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    bcrypt_cost: u32,
}

impl CredentialService {
    pub fn new(secret: &str, bcrypt_cost: u32) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            bcrypt_cost,
        }
    }

    /// salt 포함 bcrypt 해시 생성
    pub async fn hash_password(&self, plaintext: &str) -> Result<String> {
        let plaintext = plaintext.to_string();
        let cost = self.bcrypt_cost;

        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .context("password hashing task failed")?
            .context("failed to hash password")?;

        Ok(hash)
    }

    /// 비밀번호 검증
    ///
    /// 틀린 비밀번호, 손상된 해시 모두 false (에러로 올리지 않음)
    pub async fn verify_password(&self, plaintext: &str, hash: &str) -> bool {
        let plaintext = plaintext.to_string();
        let hash = hash.to_string();

        match tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash)).await {
            Ok(Ok(matches)) => matches,
            Ok(Err(e)) => {
                tracing::warn!("Stored password hash could not be verified: {}", e);
                false
            }
            Err(e) => {
                tracing::error!("Password verification task failed: {}", e);
                false
            }
        }
    }

    /// 7일 유효한 bearer token 발급
    pub fn issue_token(&self, user_id: UserId) -> Result<String> {
        self.sign(&Claims::new(user_id, Utc::now()))
    }

    fn sign(&self, claims: &Claims) -> Result<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .context("failed to sign token")
    }

    /// 서명, 만료, 형식 검증 후 user id 반환
    pub fn verify_token(&self, token: &str) -> Result<UserId> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .context("token rejected")?;
        Ok(data.claims.user_id)
    }
}
