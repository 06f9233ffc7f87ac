//! # 인증 파이프라인
//!
//! 세 가지 흐름을 조립합니다. 어느 단계든 실패하면 즉시 종료하며,
//! 실패한 요청에서는 토큰도 부분적인 사용자 상태도 밖으로 나가지 않습니다.
//!
//! ```text
//! 로컬 가입:   validate → resolve_local → User
//! 로컬 로그인: verify → issue → (User, token)
//! 소셜 로그인: state 확인 → exchange → fetch → resolve_provider → issue → (User, token)
//! ```

use std::sync::Arc;

use crate::config::{OAuthProviders, SocialProvider};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::response::LoginUrlResponse;
use crate::domain::entities::users::user::User;
use crate::domain::models::token::SessionToken;
use crate::repositories::users::UserRepository;
use crate::services::auth::credential_verifier::CredentialVerifier;
use crate::services::auth::identity_resolver::{IdentityResolver, NewLocalAccount};
use crate::services::auth::oauth_exchanger::OAuthExchanger;
use crate::services::auth::oauth_state::OAuthStateSigner;
use crate::services::auth::password_hasher::PasswordHasher;
use crate::services::auth::profile_fetcher::ProfileFetcher;
use crate::services::auth::token_service::TokenService;

/// 로그인 성공 결과
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub user: User,
    pub token: SessionToken,
}

pub struct AuthPipeline {
    credentials: CredentialVerifier,
    identities: IdentityResolver,
    exchanger: Arc<dyn OAuthExchanger>,
    profiles: Arc<dyn ProfileFetcher>,
    tokens: Arc<TokenService>,
    states: Arc<OAuthStateSigner>,
    providers: Arc<OAuthProviders>,
}

impl AuthPipeline {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        exchanger: Arc<dyn OAuthExchanger>,
        profiles: Arc<dyn ProfileFetcher>,
        tokens: Arc<TokenService>,
        states: Arc<OAuthStateSigner>,
        providers: Arc<OAuthProviders>,
    ) -> Self {
        Self {
            credentials: CredentialVerifier::new(users.clone(), hasher.clone()),
            identities: IdentityResolver::new(users, hasher),
            exchanger,
            profiles,
            tokens,
            states,
            providers,
        }
    }

    /// 로컬 가입. 토큰은 발급하지 않습니다.
    pub async fn signup(&self, account: NewLocalAccount) -> AppResult<User> {
        self.identities.resolve_local(account).await
    }

    pub async fn signin(&self, email: &str, password: &str) -> AppResult<AuthOutcome> {
        let user = self.credentials.verify(email, password).await.inspect_err(|e| {
            log::warn!("로컬 로그인 실패: {}", e);
        })?;

        let token = self.tokens.issue(&user)?;
        log::info!("로컬 로그인 성공: {}", user.email);

        Ok(AuthOutcome { user, token })
    }

    /// 소셜 로그인
    ///
    /// `state`가 있으면 코드 교환 전에 검증합니다. 검증에 실패하면 코드를 소비하지 않습니다.
    pub async fn provider_signin(
        &self,
        provider: SocialProvider,
        authorization_code: &str,
        state: Option<&str>,
    ) -> AppResult<AuthOutcome> {
        if authorization_code.trim().is_empty() {
            return Err(AppError::ValidationError("Authorization code가 필요합니다".to_string()));
        }

        if let Some(state) = state {
            self.states.verify(provider, state)?;
        }

        let provider_token = self.exchanger.exchange(provider, authorization_code).await?;
        let profile = self.profiles.fetch(provider, &provider_token.access_token).await?;
        let user = self.identities.resolve_provider(provider, profile).await?;
        let token = self.tokens.issue(&user)?;

        log::info!("{} 로그인 성공: {}", provider, user.email);
        Ok(AuthOutcome { user, token })
    }

    /// 프로바이더 인증 페이지 URL과 서명된 state 발급
    pub fn login_url(&self, provider: SocialProvider) -> AppResult<LoginUrlResponse> {
        let state = self.states.issue(provider)?;
        let login_url = self.providers.authorization_url(provider, &state)?;

        Ok(LoginUrlResponse {
            provider,
            login_url,
            state,
        })
    }
}
