//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 기반 타입을 제공합니다.
//!
//! - [`errors`] - `AppError` 통합 에러 타입, `AppResult`, `ErrorContext`
//!
//! 서비스 간 의존성은 전역 레지스트리 대신 생성자 주입과
//! `actix_web::web::Data`로 연결됩니다. (`main.rs` 참고)

pub mod errors;

pub use errors::*;
