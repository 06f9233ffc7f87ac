//! 비밀번호 해시
//!
//! bcrypt는 의도적으로 느린 CPU 작업이므로 async 워커 스레드에서 직접 돌리지 않고
//! `web::block`으로 actix의 blocking 스레드 풀에 넘깁니다.

use actix_web::web;
use async_trait::async_trait;

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, raw_password: &str) -> AppResult<String>;

    /// 해시와 일치하면 `true`
    async fn verify(&self, raw_password: &str, password_hash: &str) -> AppResult<bool>;
}

pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 환경별 cost (`BCRYPT_COST` 우선)
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, raw_password: &str) -> AppResult<String> {
        let raw_password = raw_password.to_string();
        let cost = self.cost;

        web::block(move || bcrypt::hash(raw_password, cost))
            .await
            .context("blocking pool 실행 실패")?
            .map_err(|e| AppError::InternalError(format!("비밀번호 해시 실패: {}", e)))
    }

    async fn verify(&self, raw_password: &str, password_hash: &str) -> AppResult<bool> {
        let raw_password = raw_password.to_string();
        let password_hash = password_hash.to_string();

        web::block(move || bcrypt::verify(raw_password, &password_hash))
            .await
            .context("blocking pool 실행 실패")?
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))
    }
}
