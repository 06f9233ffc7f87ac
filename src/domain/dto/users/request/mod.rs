//! 요청 DTO
//!
//! 검증 규칙은 `validator` derive로 선언하고, 핸들러에서 `validate()` 실패를
//! `AppError::ValidationError`로 변환합니다.

pub mod signup_request;
pub mod auth_request;

pub use signup_request::SignupRequest;
pub use auth_request::{OAuthCallbackQuery, SigninRequest};
