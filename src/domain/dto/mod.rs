//! # Data Transfer Objects
//!
//! HTTP API 계약(요청/응답 본문)을 정의합니다.
//! 엔티티를 그대로 노출하지 않고, 응답 DTO로 변환하면서 민감한 필드를 제외합니다.

pub mod users;

pub use users::*;
