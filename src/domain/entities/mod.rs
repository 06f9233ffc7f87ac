//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 영속 엔티티들입니다.
//! `_id`는 저장 시점에 할당되므로 `Option<ObjectId>`로 표현합니다.

pub mod users;

pub use users::*;
