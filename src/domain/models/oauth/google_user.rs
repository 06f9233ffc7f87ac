//! # Google OAuth 사용자 정보 모델
//!
//! `GET https://www.googleapis.com/oauth2/v2/userinfo` 응답입니다. (평평한 구조)

use serde::Deserialize;

use crate::core::errors::{AppError, AppResult};
use crate::domain::models::oauth::provider_profile::{display_name_or_email, ProviderProfile};

#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 계정 고유 ID
    pub id: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    /// 프로필 이미지 URL
    #[serde(default)]
    pub picture: Option<String>,

    #[serde(default)]
    pub verified_email: Option<bool>,
}

impl TryFrom<GoogleUserInfo> for ProviderProfile {
    type Error = AppError;

    fn try_from(info: GoogleUserInfo) -> AppResult<Self> {
        let email = info
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .ok_or_else(|| {
                AppError::ProviderProfileError("Google 응답에 이메일이 없습니다".to_string())
            })?;

        if info.verified_email == Some(false) {
            return Err(AppError::ProviderProfileError(
                "인증되지 않은 Google 이메일입니다".to_string(),
            ));
        }

        Ok(ProviderProfile {
            provider_user_id: info.id,
            display_name: display_name_or_email(info.name, &email),
            email,
            avatar_url: info.picture,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_profile_mapping() {
        let json = r#"{
            "id": "1098765",
            "email": "g@x.com",
            "verified_email": true,
            "name": "Gina Kim",
            "given_name": "Gina",
            "picture": "https://lh3.googleusercontent.com/a/pic"
        }"#;

        let info: GoogleUserInfo = serde_json::from_str(json).unwrap();
        let profile = ProviderProfile::try_from(info).unwrap();

        assert_eq!(profile.provider_user_id, "1098765");
        assert_eq!(profile.email, "g@x.com");
        assert_eq!(profile.display_name, "Gina Kim");
        assert_eq!(
            profile.avatar_url.as_deref(),
            Some("https://lh3.googleusercontent.com/a/pic")
        );
    }

    #[test]
    fn test_missing_email_is_profile_error() {
        let info: GoogleUserInfo = serde_json::from_str(r#"{ "id": "1", "name": "x" }"#).unwrap();
        assert!(matches!(
            ProviderProfile::try_from(info),
            Err(AppError::ProviderProfileError(_))
        ));
    }

    #[test]
    fn test_email_is_trimmed() {
        let json = r#"{ "id": "2", "email": " g@x.com\n", "verified_email": true, "name": "Gina" }"#;
        let info: GoogleUserInfo = serde_json::from_str(json).unwrap();

        assert_eq!(ProviderProfile::try_from(info).unwrap().email, "g@x.com");
    }

    #[test]
    fn test_unverified_email_is_rejected() {
        let json = r#"{ "id": "1", "email": "g@x.com", "verified_email": false }"#;
        let info: GoogleUserInfo = serde_json::from_str(json).unwrap();
        assert!(ProviderProfile::try_from(info).is_err());
    }
}
