//! 인증 서비스 모듈
//!
//! 파이프라인을 이루는 각 단계와 이를 조립하는 [`AuthPipeline`]을 제공합니다.
//!
//! - [`password_hasher`] - bcrypt 해시 (blocking 풀에서 실행)
//! - [`credential_verifier`] - 이메일/비밀번호 검증
//! - [`oauth_exchanger`] - 인가 코드 → 프로바이더 토큰
//! - [`profile_fetcher`] - 프로바이더 토큰 → 프로필
//! - [`identity_resolver`] - 로컬/프로바이더 신원 → 사용자 레코드
//! - [`token_service`] - 세션 토큰 발급/검증
//! - [`oauth_state`] - OAuth state 서명/검증
//!
//! # Security
//!
//! - 계정 존재 여부를 응답으로 구분하지 않음
//! - 프로바이더 에러 본문은 debug 로그에만 남김
//! - 인가 코드와 토큰은 로그에 남기지 않음

pub mod password_hasher;
pub mod credential_verifier;
pub mod oauth_exchanger;
pub mod profile_fetcher;
pub mod identity_resolver;
pub mod token_service;
pub mod oauth_state;
pub mod auth_pipeline;

#[cfg(test)]
pub(crate) mod provider_stub;

pub use password_hasher::{BcryptPasswordHasher, PasswordHasher};
pub use credential_verifier::CredentialVerifier;
pub use oauth_exchanger::{provider_http_client, HttpOAuthExchanger, OAuthExchanger};
pub use profile_fetcher::{HttpProfileFetcher, ProfileFetcher};
pub use identity_resolver::{IdentityResolver, NewLocalAccount};
pub use token_service::TokenService;
pub use oauth_state::OAuthStateSigner;
pub use auth_pipeline::{AuthOutcome, AuthPipeline};
