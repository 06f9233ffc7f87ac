//! 프로바이더 공통 모델
//!
//! Kakao/Google 응답은 각자 모양이 다르지만, 파이프라인은 여기 정의된
//! 공통 형태만 다룹니다. 두 타입 모두 요청 처리 중에만 존재하며 저장되지 않습니다.

use serde::Deserialize;

/// 프로바이더에서 조회한 사용자 프로필
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderProfile {
    pub provider_user_id: String,
    pub email: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

/// 인가 코드 교환으로 받은 프로바이더 액세스 토큰
#[derive(Clone)]
pub struct ProviderToken {
    pub access_token: String,
    pub token_type: String,
    /// 만료까지 남은 초 (프로바이더가 주지 않으면 None)
    pub expires_in: Option<i64>,
}

impl std::fmt::Debug for ProviderToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderToken")
            .field("access_token", &"***")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// 토큰 엔드포인트 응답 (RFC 6749 5.1)
///
/// Kakao와 Google 모두 이 형태로 응답합니다.
#[derive(Deserialize)]
pub struct TokenEndpointResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

impl From<TokenEndpointResponse> for ProviderToken {
    fn from(response: TokenEndpointResponse) -> Self {
        Self {
            access_token: response.access_token,
            token_type: response.token_type.unwrap_or_else(|| "bearer".to_string()),
            expires_in: response.expires_in,
        }
    }
}

/// 이름이 비어 있을 때 이메일 앞부분을 표시 이름으로 사용합니다.
pub(crate) fn display_name_or_email(name: Option<String>, email: &str) -> String {
    name.map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| email.split('@').next().unwrap_or(email).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_debug_redacts_access_token() {
        let token = ProviderToken {
            access_token: "ya29.secret".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: Some(3599),
        };

        let printed = format!("{:?}", token);
        assert!(!printed.contains("ya29.secret"));
        assert!(printed.contains("Bearer"));
    }

    #[test]
    fn test_token_response_without_optional_fields() {
        let response: TokenEndpointResponse =
            serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        let token = ProviderToken::from(response);

        assert_eq!(token.access_token, "abc");
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.expires_in, None);
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(display_name_or_email(Some("Bob".to_string()), "b@x.com"), "Bob");
        assert_eq!(display_name_or_email(Some("  ".to_string()), "b@x.com"), "b");
        assert_eq!(display_name_or_email(None, "carol@x.com"), "carol");
    }
}
