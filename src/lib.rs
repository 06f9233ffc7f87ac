//! 파라볼 인증 서비스
//!
//! 이커머스 백엔드의 신원 확인과 세션 토큰 발급을 담당합니다.
//! 로컬 이메일/비밀번호, Kakao, Google 세 가지 경로로 들어온 신원을
//! 하나의 사용자 레코드로 연결하고 서명된 세션 토큰을 발급합니다.
//!
//! # Features
//!
//! - **로컬 계정**: 가입, 로그인 (bcrypt)
//! - **소셜 로그인**: Kakao, Google OAuth2 인가 코드 플로우
//! - **계정 연결**: 이메일당 사용자 하나, 동시 요청에서도 중복 생성 없음
//! - **세션 토큰**: HS256 JWT, 서버 저장 없음
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /auth, /user, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← DTO 검증/변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  AuthPipeline   │ ← CredentialVerifier | OAuthExchanger → ProfileFetcher
//! │                 │   → IdentityResolver → TokenService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ UserRepository  │ ← MongoDB 또는 메모리
//! └─────────────────┘
//! ```
//!
//! 모든 구성 요소는 `main`에서 생성자로 조립되어 `web::Data`로 공유됩니다.

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
