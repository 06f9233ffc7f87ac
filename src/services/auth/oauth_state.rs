//! OAuth `state` 파라미터 서명/검증
//!
//! 로그인 URL을 만들 때 프로바이더 이름과 nonce를 담은 짧은 수명의 HS256 토큰을
//! `state`로 발급하고, 콜백에서 같은 프로바이더로 돌아왔는지 확인합니다.
//! 서버에 저장하는 값은 없습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::{OAuthConfig, SocialProvider};
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::token::OAuthStateClaims;

pub struct OAuthStateSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl OAuthStateSigner {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn from_config() -> Self {
        Self::new(
            &OAuthConfig::state_secret(),
            Duration::minutes(OAuthConfig::state_ttl_minutes()),
        )
    }

    pub fn issue(&self, provider: SocialProvider) -> AppResult<String> {
        let now = Utc::now();
        let claims = OAuthStateClaims {
            provider: provider.as_str().to_string(),
            nonce: Uuid::new_v4().simple().to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("OAuth state 생성 실패: {}", e)))
    }

    pub fn verify(&self, provider: SocialProvider, state: &str) -> AppResult<()> {
        let claims = decode::<OAuthStateClaims>(state, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::warn!("{} OAuth state 검증 실패: {}", provider, e);
                AppError::ValidationError("유효하지 않은 OAuth state입니다".to_string())
            })?;

        if claims.provider != provider.as_str() {
            log::warn!(
                "OAuth state 프로바이더 불일치: state={}, callback={}",
                claims.provider,
                provider
            );
            return Err(AppError::ValidationError(
                "유효하지 않은 OAuth state입니다".to_string(),
            ));
        }

        Ok(())
    }
}
