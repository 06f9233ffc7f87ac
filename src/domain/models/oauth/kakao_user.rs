//! Kakao 사용자 정보 모델
//!
//! `GET https://kapi.kakao.com/v2/user/me` 응답입니다.
//! 이메일과 프로필은 `kakao_account` 아래에 중첩되어 있고, 동의 항목에 따라 빠질 수 있습니다.
//!
//! ```json
//! {
//!   "id": 123456789,
//!   "kakao_account": {
//!     "email": "b@x.com",
//!     "is_email_valid": true,
//!     "is_email_verified": true,
//!     "profile": { "nickname": "Bob", "profile_image_url": "http://k.kakaocdn.net/.../img.jpg" }
//!   }
//! }
//! ```

use serde::Deserialize;

use crate::core::errors::{AppError, AppResult};
use crate::domain::models::oauth::provider_profile::{display_name_or_email, ProviderProfile};

#[derive(Debug, Deserialize)]
pub struct KakaoUserInfo {
    pub id: i64,
    #[serde(default)]
    pub kakao_account: Option<KakaoAccount>,
}

#[derive(Debug, Deserialize)]
pub struct KakaoAccount {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_email_valid: Option<bool>,
    #[serde(default)]
    pub is_email_verified: Option<bool>,
    #[serde(default)]
    pub profile: Option<KakaoProfile>,
}

#[derive(Debug, Deserialize)]
pub struct KakaoProfile {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

impl TryFrom<KakaoUserInfo> for ProviderProfile {
    type Error = AppError;

    fn try_from(info: KakaoUserInfo) -> AppResult<Self> {
        let account = info.kakao_account.ok_or_else(|| {
            AppError::ProviderProfileError("Kakao 응답에 kakao_account가 없습니다".to_string())
        })?;

        let email = account
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .ok_or_else(|| {
                AppError::ProviderProfileError("Kakao 계정 이메일 동의가 필요합니다".to_string())
            })?;

        // 인증되지 않은 이메일은 계정 연결에 사용하지 않음
        if account.is_email_valid == Some(false) || account.is_email_verified == Some(false) {
            return Err(AppError::ProviderProfileError(
                "인증되지 않은 Kakao 이메일입니다".to_string(),
            ));
        }

        let (nickname, avatar_url) = match account.profile {
            Some(profile) => (profile.nickname, profile.profile_image_url),
            None => (None, None),
        };

        Ok(ProviderProfile {
            provider_user_id: info.id.to_string(),
            display_name: display_name_or_email(nickname, &email),
            email,
            avatar_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_profile_mapping() {
        let json = r#"{
            "id": 4242,
            "connected_at": "2022-10-01T00:00:00Z",
            "kakao_account": {
                "email": "b@x.com",
                "profile": { "nickname": "Bob", "profile_image_url": "http://img/bob.jpg" }
            }
        }"#;

        let info: KakaoUserInfo = serde_json::from_str(json).unwrap();
        let profile = ProviderProfile::try_from(info).unwrap();

        assert_eq!(profile.provider_user_id, "4242");
        assert_eq!(profile.email, "b@x.com");
        assert_eq!(profile.display_name, "Bob");
        assert_eq!(profile.avatar_url.as_deref(), Some("http://img/bob.jpg"));
    }

    #[test]
    fn test_missing_email_is_profile_error() {
        let json = r#"{ "id": 1, "kakao_account": { "profile": { "nickname": "NoMail" } } }"#;

        let info: KakaoUserInfo = serde_json::from_str(json).unwrap();
        assert!(matches!(
            ProviderProfile::try_from(info),
            Err(AppError::ProviderProfileError(_))
        ));
    }

    #[test]
    fn test_unverified_email_is_rejected() {
        let unverified = r#"{ "id": 1, "kakao_account": { "email": "a@x.com", "is_email_valid": true, "is_email_verified": false } }"#;
        let invalid = r#"{ "id": 1, "kakao_account": { "email": "a@x.com", "is_email_valid": false, "is_email_verified": true } }"#;

        for json in [unverified, invalid] {
            let info: KakaoUserInfo = serde_json::from_str(json).unwrap();
            assert!(matches!(
                ProviderProfile::try_from(info),
                Err(AppError::ProviderProfileError(_))
            ));
        }
    }

    #[test]
    fn test_email_is_trimmed() {
        let json = r#"{ "id": 7, "kakao_account": { "email": "  b@x.com ", "is_email_verified": true } }"#;

        let info: KakaoUserInfo = serde_json::from_str(json).unwrap();
        let profile = ProviderProfile::try_from(info).unwrap();

        assert_eq!(profile.email, "b@x.com");
        assert_eq!(profile.display_name, "b");
    }

    #[test]
    fn test_missing_account_is_profile_error() {
        let info: KakaoUserInfo = serde_json::from_str(r#"{ "id": 1 }"#).unwrap();
        assert!(ProviderProfile::try_from(info).is_err());
    }
}
