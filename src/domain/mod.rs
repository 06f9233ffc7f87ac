//! # Domain Layer Module
//!
//! ```text
//! Domain Layer
//! ├── entities  - 영속 엔티티 (User)
//! ├── dto       - HTTP 요청/응답 계약
//! └── models    - 일시적 모델 (프로바이더 프로필, 토큰 클레임, 인증 컨텍스트)
//! ```
//!
//! 서비스 계층은 엔티티와 모델만 다루고, DTO 변환은 핸들러에서 이루어집니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
