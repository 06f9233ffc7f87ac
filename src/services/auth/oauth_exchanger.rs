//! OAuth2 인가 코드 교환
//!
//! 인가 코드는 일회용이므로 실패해도 재시도하지 않습니다.
//! 코드와 발급된 토큰은 어떤 로그 레벨에도 남기지 않습니다.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{OAuthProviders, SocialProvider};
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::models::oauth::{ProviderToken, TokenEndpointResponse};

#[async_trait]
pub trait OAuthExchanger: Send + Sync {
    async fn exchange(&self, provider: SocialProvider, authorization_code: &str) -> AppResult<ProviderToken>;
}

/// 프로바이더 호출용 HTTP 클라이언트 (요청 단위 timeout 적용)
pub fn provider_http_client(timeout: Duration) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("HTTP 클라이언트 생성 실패")
}

pub struct HttpOAuthExchanger {
    client: reqwest::Client,
    providers: Arc<OAuthProviders>,
}

impl HttpOAuthExchanger {
    pub fn new(client: reqwest::Client, providers: Arc<OAuthProviders>) -> Self {
        Self { client, providers }
    }
}

#[async_trait]
impl OAuthExchanger for HttpOAuthExchanger {
    async fn exchange(&self, provider: SocialProvider, authorization_code: &str) -> AppResult<ProviderToken> {
        let settings = self.providers.get(provider)?;

        let mut params = vec![
            ("grant_type", "authorization_code"),
            ("client_id", settings.client_id.as_str()),
            ("redirect_uri", settings.redirect_uri.as_str()),
            ("code", authorization_code),
        ];
        if let Some(secret) = settings.client_secret.as_deref() {
            params.push(("client_secret", secret));
        }

        let response = self
            .client
            .post(&settings.token_endpoint)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                log::warn!(
                    "{} 토큰 요청 실패 (timeout: {}, connect: {})",
                    provider,
                    e.is_timeout(),
                    e.is_connect()
                );
                AppError::ProviderExchangeError(format!("{} token request failed", provider))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("{} 토큰 교환 거절: status {}", provider, status);
            log::debug!("{} 토큰 교환 응답 본문: {}", provider, body);
            return Err(AppError::ProviderExchangeError(format!(
                "{} token endpoint returned {}",
                provider, status
            )));
        }

        let token_response = response.json::<TokenEndpointResponse>().await.map_err(|_| {
            log::warn!("{} 토큰 응답 파싱 실패", provider);
            AppError::ProviderExchangeError(format!("{} token response malformed", provider))
        })?;

        if token_response.access_token.trim().is_empty() {
            return Err(AppError::ProviderExchangeError(format!(
                "{} returned empty access token",
                provider
            )));
        }

        Ok(token_response.into())
    }
}
