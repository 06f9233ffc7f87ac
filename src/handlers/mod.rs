//! # HTTP Handlers
//!
//! 핸들러는 요청 DTO 검증과 응답 DTO 변환만 담당하고, 실제 로직은 서비스에 위임합니다.
//! 에러는 모두 `AppError`로 반환되어 `ResponseError` 구현을 통해 JSON 응답이 됩니다.

pub mod auth;
pub mod users;
