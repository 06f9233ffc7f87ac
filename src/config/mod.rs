//! # Configuration Module
//!
//! 환경 변수 기반 설정을 한곳에서 관리합니다.
//!
//! - [`data_config`] - 실행 환경, 서버, 비밀번호 해싱, 사용자 저장소 설정
//! - [`auth_config`] - 세션 토큰, OAuth state, Kakao/Google 프로바이더 설정
//!
//! `.env.{PROFILE}` 파일은 `main.rs`에서 `dotenv`로 로드됩니다.
//! 프로바이더 설정은 시작 시 한 번 [`OAuthProviders`]로 구성된 뒤 읽기 전용으로 공유됩니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
