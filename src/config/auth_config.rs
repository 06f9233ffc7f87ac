//! # Authentication Configuration Module
//!
//! 세션 토큰(JWT), OAuth state, 소셜 프로바이더(Kakao, Google) 관련 설정을 관리합니다.
//!
//! 환경 변수를 직접 읽는 정적 접근자(`JwtConfig`, `OAuthConfig`,
//! `KakaoOAuthConfig`, `GoogleOAuthConfig`)와, 애플리케이션 시작 시 한 번 구성되어
//! 이후 읽기 전용으로 공유되는 [`OAuthProviders`] 값으로 나뉩니다.
//!
//! ## 환경 변수
//!
//! ### 세션 토큰
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```
//!
//! ### OAuth 공통
//! ```bash
//! export OAUTH_STATE_SECRET="your-oauth-state-secret"
//! export OAUTH_STATE_TTL_MINUTES="10"
//! export OAUTH_HTTP_TIMEOUT_SECONDS="10"
//! export OAUTH_SUCCESS_REDIRECT_URI="https://parabole.shop/oauth/success"   # 선택
//! ```
//!
//! ### Kakao (client secret 없음)
//! ```bash
//! export KAKAO_CLIENT_ID="kakao-rest-api-key"
//! export KAKAO_REDIRECT_URI="http://localhost:8080/auth/token/kakao"
//! ```
//!
//! ### Google
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:8080/auth/token/google"
//! ```

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};

/// 계정이 생성된 경로
///
/// `Home`은 이메일/비밀번호로 가입한 로컬 계정입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthProvider {
    Home,
    Kakao,
    Google,
}

/// OAuth2 인가 코드 플로우를 지원하는 외부 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Kakao,
    Google,
}

impl SocialProvider {
    /// 경로 파라미터(`/auth/token/{provider}`)를 파싱합니다. 대소문자는 무시합니다.
    pub fn from_str(s: &str) -> AppResult<Self> {
        match s.to_lowercase().as_str() {
            "kakao" => Ok(SocialProvider::Kakao),
            "google" => Ok(SocialProvider::Google),
            _ => Err(AppError::UnsupportedProvider(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialProvider::Kakao => "kakao",
            SocialProvider::Google => "google",
        }
    }

    /// 이 프로바이더로 생성되는 계정의 `AuthProvider`
    pub fn auth_provider(&self) -> AuthProvider {
        match self {
            SocialProvider::Kakao => AuthProvider::Kakao,
            SocialProvider::Google => AuthProvider::Google,
        }
    }
}

impl std::fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 단일 프로바이더의 OAuth2 클라이언트 설정
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub client_id: String,
    /// Kakao는 이 배포에서 client secret을 사용하지 않습니다.
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    pub authorize_endpoint: String,
    pub token_endpoint: String,
    pub profile_endpoint: String,
    pub scope: Option<String>,
}

/// 시작 시 구성되는 프로바이더 설정 묶음 (읽기 전용)
///
/// 설정되지 않은 프로바이더로 요청이 오면 `UnsupportedProvider`로 거절합니다.
#[derive(Debug, Clone, Default)]
pub struct OAuthProviders {
    kakao: Option<ProviderSettings>,
    google: Option<ProviderSettings>,
    success_redirect_uri: Option<String>,
}

impl OAuthProviders {
    pub fn new(kakao: Option<ProviderSettings>, google: Option<ProviderSettings>) -> Self {
        Self {
            kakao,
            google,
            success_redirect_uri: None,
        }
    }

    pub fn with_success_redirect(mut self, uri: Option<String>) -> Self {
        self.success_redirect_uri = uri;
        self
    }

    /// 환경 변수에서 두 프로바이더 설정을 읽어 구성합니다.
    pub fn from_env() -> Self {
        let kakao = KakaoOAuthConfig::settings();
        let google = GoogleOAuthConfig::settings();

        if kakao.is_none() {
            log::warn!("KAKAO_CLIENT_ID/KAKAO_REDIRECT_URI 미설정: Kakao 로그인 비활성화");
        }
        if google.is_none() {
            log::warn!("GOOGLE_CLIENT_ID/GOOGLE_REDIRECT_URI 미설정: Google 로그인 비활성화");
        }

        Self::new(kakao, google).with_success_redirect(OAuthConfig::success_redirect_uri())
    }

    /// 소셜 로그인 성공 후 토큰을 전달할 리다이렉트 주소 (`<uri>?token=<token>`)
    ///
    /// 리다이렉트가 설정되지 않았으면 None이며, 이 경우 JSON으로 응답합니다.
    pub fn success_redirect_url(&self, token: &str) -> Option<String> {
        self.success_redirect_uri.as_ref().map(|uri| {
            let separator = if uri.contains('?') { '&' } else { '?' };
            format!("{}{}token={}", uri, separator, urlencoding::encode(token))
        })
    }

    pub fn get(&self, provider: SocialProvider) -> AppResult<&ProviderSettings> {
        let settings = match provider {
            SocialProvider::Kakao => self.kakao.as_ref(),
            SocialProvider::Google => self.google.as_ref(),
        };

        settings.ok_or_else(|| AppError::UnsupportedProvider(provider.to_string()))
    }

    /// 프로바이더 인증 페이지 URL을 생성합니다.
    pub fn authorization_url(&self, provider: SocialProvider, state: &str) -> AppResult<String> {
        let settings = self.get(provider)?;

        let mut params = vec![
            ("client_id", settings.client_id.as_str()),
            ("redirect_uri", settings.redirect_uri.as_str()),
            ("response_type", "code"),
            ("state", state),
        ];
        if let Some(scope) = settings.scope.as_deref() {
            params.push(("scope", scope));
        }

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        Ok(format!("{}?{}", settings.authorize_endpoint, query_string))
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub struct KakaoOAuthConfig;

impl KakaoOAuthConfig {
    pub fn settings() -> Option<ProviderSettings> {
        Some(ProviderSettings {
            client_id: non_empty_env("KAKAO_CLIENT_ID")?,
            client_secret: non_empty_env("KAKAO_CLIENT_SECRET"),
            redirect_uri: non_empty_env("KAKAO_REDIRECT_URI")?,
            authorize_endpoint: non_empty_env("KAKAO_AUTH_URI")
                .unwrap_or_else(|| "https://kauth.kakao.com/oauth/authorize".to_string()),
            token_endpoint: non_empty_env("KAKAO_TOKEN_URI")
                .unwrap_or_else(|| "https://kauth.kakao.com/oauth/token".to_string()),
            profile_endpoint: non_empty_env("KAKAO_PROFILE_URI")
                .unwrap_or_else(|| "https://kapi.kakao.com/v2/user/me".to_string()),
            scope: None,
        })
    }
}

pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    pub fn settings() -> Option<ProviderSettings> {
        Some(ProviderSettings {
            client_id: non_empty_env("GOOGLE_CLIENT_ID")?,
            client_secret: non_empty_env("GOOGLE_CLIENT_SECRET"),
            redirect_uri: non_empty_env("GOOGLE_REDIRECT_URI")?,
            authorize_endpoint: non_empty_env("GOOGLE_AUTH_URI")
                .unwrap_or_else(|| "https://accounts.google.com/o/oauth2/auth".to_string()),
            token_endpoint: non_empty_env("GOOGLE_TOKEN_URI")
                .unwrap_or_else(|| "https://oauth2.googleapis.com/token".to_string()),
            profile_endpoint: non_empty_env("GOOGLE_PROFILE_URI")
                .unwrap_or_else(|| "https://www.googleapis.com/oauth2/v2/userinfo".to_string()),
            scope: Some("openid email profile".to_string()),
        })
    }
}

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

pub struct OAuthConfig;

impl OAuthConfig {
    pub fn state_secret() -> String {
        env::var("OAUTH_STATE_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("OAUTH_STATE_SECRET not set, using default (not secure for production!)");
                "oauth-state-secret".to_string()
            })
    }

    pub fn state_ttl_minutes() -> i64 {
        env::var("OAUTH_STATE_TTL_MINUTES")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }

    /// 프로바이더 HTTP 호출 제한 시간
    pub fn http_timeout() -> Duration {
        let seconds = env::var("OAUTH_HTTP_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        Duration::from_secs(seconds)
    }

    /// 설정되어 있으면 소셜 로그인 성공 시 이 주소로 토큰과 함께 리다이렉트합니다.
    pub fn success_redirect_uri() -> Option<String> {
        non_empty_env("OAUTH_SUCCESS_REDIRECT_URI")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn google_settings() -> ProviderSettings {
        ProviderSettings {
            client_id: "client id".to_string(),
            client_secret: Some("secret".to_string()),
            redirect_uri: "http://localhost:8080/auth/token/google".to_string(),
            authorize_endpoint: "https://accounts.google.com/o/oauth2/auth".to_string(),
            token_endpoint: "https://oauth2.googleapis.com/token".to_string(),
            profile_endpoint: "https://www.googleapis.com/oauth2/v2/userinfo".to_string(),
            scope: Some("openid email profile".to_string()),
        }
    }

    #[test]
    fn test_auth_provider_serialization() {
        let json = serde_json::to_string(&AuthProvider::Kakao).unwrap();
        assert_eq!(json, "\"KAKAO\"");

        let deserialized: AuthProvider = serde_json::from_str("\"HOME\"").unwrap();
        assert_eq!(deserialized, AuthProvider::Home);
    }

    #[test]
    fn test_social_provider_parsing() {
        assert_eq!(SocialProvider::from_str("kakao").unwrap(), SocialProvider::Kakao);
        assert_eq!(SocialProvider::from_str("GOOGLE").unwrap(), SocialProvider::Google);
        assert!(matches!(
            SocialProvider::from_str("naver"),
            Err(AppError::UnsupportedProvider(_))
        ));
        assert_eq!(SocialProvider::Kakao.auth_provider(), AuthProvider::Kakao);
    }

    #[test]
    fn test_unconfigured_provider_is_unsupported() {
        let providers = OAuthProviders::new(None, Some(google_settings()));

        assert!(providers.get(SocialProvider::Google).is_ok());
        assert!(matches!(
            providers.get(SocialProvider::Kakao),
            Err(AppError::UnsupportedProvider(_))
        ));
    }

    #[test]
    fn test_authorization_url_encodes_parameters() {
        let providers = OAuthProviders::new(None, Some(google_settings()));
        let url = providers
            .authorization_url(SocialProvider::Google, "state-123")
            .unwrap();

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/auth?"));
        assert!(url.contains("client_id=client%20id"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fauth%2Ftoken%2Fgoogle"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("state=state-123"));
        assert!(url.contains("scope=openid%20email%20profile"));
    }

    #[test]
    fn test_success_redirect_url() {
        let providers = OAuthProviders::new(None, None);
        assert!(providers.success_redirect_url("jwt").is_none());

        let providers = providers.with_success_redirect(Some("https://parabole.shop/oauth".to_string()));
        assert_eq!(
            providers.success_redirect_url("a.b.c").as_deref(),
            Some("https://parabole.shop/oauth?token=a.b.c")
        );

        let providers = OAuthProviders::new(None, None)
            .with_success_redirect(Some("https://parabole.shop/cb?from=kakao".to_string()));
        assert_eq!(
            providers.success_redirect_url("t").as_deref(),
            Some("https://parabole.shop/cb?from=kakao&token=t")
        );
    }
}
