//! # Middlewares
//!
//! - [`AuthMiddleware`] - Bearer 세션 토큰 검증과 역할 확인

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
