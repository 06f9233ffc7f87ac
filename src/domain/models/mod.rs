//! # Domain Models
//!
//! 영속되지 않는 모델들입니다.
//!
//! - [`auth`] - 인증된 사용자 추출기, 역할 요구사항
//! - [`oauth`] - 프로바이더 응답과 공통 프로필
//! - [`token`] - 세션 토큰/State 클레임

pub mod auth;
pub mod oauth;
pub mod token;

pub use auth::*;
pub use oauth::*;
pub use token::*;
