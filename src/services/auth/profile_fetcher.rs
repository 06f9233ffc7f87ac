//! 프로바이더 사용자 프로필 조회
//!
//! Bearer 토큰으로 프로필 엔드포인트를 호출하고, 프로바이더별 응답을
//! [`ProviderProfile`]로 변환합니다. 변환은 [`parse_profile`]에 분리되어 있습니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{OAuthProviders, SocialProvider};
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::oauth::{GoogleUserInfo, KakaoUserInfo, ProviderProfile};

#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    async fn fetch(&self, provider: SocialProvider, access_token: &str) -> AppResult<ProviderProfile>;
}

/// 프로필 응답 본문을 공통 프로필로 변환합니다.
pub fn parse_profile(provider: SocialProvider, body: &[u8]) -> AppResult<ProviderProfile> {
    let malformed = |e: serde_json::Error| {
        AppError::ProviderProfileError(format!("{} profile malformed: {}", provider, e))
    };

    match provider {
        SocialProvider::Kakao => {
            let info: KakaoUserInfo = serde_json::from_slice(body).map_err(malformed)?;
            ProviderProfile::try_from(info)
        }
        SocialProvider::Google => {
            let info: GoogleUserInfo = serde_json::from_slice(body).map_err(malformed)?;
            ProviderProfile::try_from(info)
        }
    }
}

pub struct HttpProfileFetcher {
    client: reqwest::Client,
    providers: Arc<OAuthProviders>,
}

impl HttpProfileFetcher {
    pub fn new(client: reqwest::Client, providers: Arc<OAuthProviders>) -> Self {
        Self { client, providers }
    }
}

#[async_trait]
impl ProfileFetcher for HttpProfileFetcher {
    async fn fetch(&self, provider: SocialProvider, access_token: &str) -> AppResult<ProviderProfile> {
        let settings = self.providers.get(provider)?;

        let response = self
            .client
            .get(&settings.profile_endpoint)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                log::warn!("{} 프로필 요청 실패 (timeout: {})", provider, e.is_timeout());
                AppError::ProviderProfileError(format!("{} profile request failed", provider))
            })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{} 프로필 조회 거절: status {}", provider, status);
            return Err(AppError::ProviderProfileError(format!(
                "{} profile endpoint returned {}",
                provider, status
            )));
        }

        let body = response.bytes().await.map_err(|_| {
            AppError::ProviderProfileError(format!("{} profile body unreadable", provider))
        })?;

        parse_profile(provider, &body).inspect_err(|e| {
            log::warn!("{} 프로필 변환 실패: {}", provider, e);
        })
    }
}
