//! # Service Layer
//!
//! 모든 서비스는 생성자로 의존성을 주입받고, `main`에서 한 번 생성되어
//! `web::Data`로 핸들러에 공유됩니다.

pub mod auth;
pub mod users;
