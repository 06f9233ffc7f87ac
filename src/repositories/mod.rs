//! # Repository Layer
//!
//! 영속성 경계입니다. 서비스는 `Arc<dyn UserRepository>`만 알고,
//! 어떤 구현을 쓸지는 `main`에서 `USER_STORE`에 따라 결정합니다.

pub mod users;

pub use users::*;
