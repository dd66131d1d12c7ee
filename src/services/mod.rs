//! Services Module
//!
//! 비즈니스 로직을 담당하는 서비스 레이어
//!
//! # Services
//! - `CredentialService`: 비밀번호 해시, bearer token 발급/검증

mod credentials;

pub use credentials::{Claims, CredentialService, TOKEN_TTL_DAYS};
