//! # OAuth Models
//!
//! 소셜 로그인 과정에서만 존재하는 일시적인 모델입니다.
//!
//! - [`provider_profile`] - 프로바이더 공통 프로필/토큰
//! - [`kakao_user`] - Kakao `/v2/user/me` 응답 (중첩 구조)
//! - [`google_user`] - Google `userinfo` 응답 (평평한 구조)

pub mod provider_profile;
pub mod kakao_user;
pub mod google_user;

pub use provider_profile::{ProviderProfile, ProviderToken, TokenEndpointResponse};
pub use kakao_user::KakaoUserInfo;
pub use google_user::GoogleUserInfo;
