//! Middleware Module
//!
//! - `auth`: bearer token 인증 게이트

pub mod auth;

pub use auth::{require_auth, AuthUser};
