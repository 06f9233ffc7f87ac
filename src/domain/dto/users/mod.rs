//! 사용자/인증 관련 DTO
//!
//! JSON 필드는 camelCase를 사용합니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
