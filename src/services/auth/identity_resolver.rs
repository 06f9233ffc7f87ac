//! 계정 연결 (identity linking)
//!
//! 로컬 가입 정보나 프로바이더 프로필을 하나의 사용자 레코드로 매핑합니다.
//! 이메일당 사용자는 하나이며, 이미 있는 계정은 절대 덮어쓰지 않습니다.

use std::sync::Arc;

use crate::config::SocialProvider;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;
use crate::domain::models::oauth::ProviderProfile;
use crate::repositories::users::UserRepository;
use crate::services::auth::password_hasher::PasswordHasher;
use crate::utils::string_utils::{clean_optional_string, is_valid_string, validate_required_string};

/// 로컬 가입 입력
#[derive(Debug, Clone)]
pub struct NewLocalAccount {
    pub email: String,
    pub display_name: String,
    pub nickname: String,
    pub phone: Option<String>,
    pub raw_password: String,
}

pub struct IdentityResolver {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl IdentityResolver {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// 로컬 계정 생성
    ///
    /// 이메일이 이미 있으면 `DuplicateEmail`. 조회와 삽입 사이에 다른 요청이 같은
    /// 이메일을 먼저 저장해도 저장소의 unique 제약 때문에 결과는 같습니다.
    pub async fn resolve_local(&self, account: NewLocalAccount) -> AppResult<User> {
        let email = validate_required_string(&account.email, "이메일")?;
        if !is_valid_string(&account.raw_password) {
            return Err(AppError::ValidationError("비밀번호은(는) 필수입니다".to_string()));
        }
        let display_name = validate_required_string(&account.display_name, "이름")?;
        let nickname = validate_required_string(&account.nickname, "닉네임")?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::DuplicateEmail(email));
        }

        let password_hash = self.hasher.hash(&account.raw_password).await?;

        let user = User::new_local(
            email,
            display_name,
            nickname,
            clean_optional_string(account.phone),
            password_hash,
        );

        let saved = self.users.insert(user).await?;
        log::info!("로컬 계정 생성: {}", saved.email);
        Ok(saved)
    }

    /// 프로바이더 프로필로 사용자 조회, 없으면 생성
    ///
    /// 같은 이메일로 동시에 들어온 요청 중 하나만 삽입에 성공하고,
    /// 나머지는 충돌 후 재조회한 같은 레코드를 받습니다.
    pub async fn resolve_provider(
        &self,
        provider: SocialProvider,
        profile: ProviderProfile,
    ) -> AppResult<User> {
        if let Some(existing) = self.users.find_by_email(&profile.email).await? {
            log::debug!("기존 계정으로 {} 로그인: {}", provider, existing.email);
            return Ok(existing);
        }

        let email = profile.email.clone();
        match self.users.insert(User::new_provider(provider, profile)).await {
            Ok(created) => {
                log::info!("새 {} 사용자 등록: {}", provider, created.email);
                Ok(created)
            }
            Err(AppError::DuplicateEmail(_)) => {
                log::debug!("{} 계정 동시 생성 충돌, 재조회: {}", provider, email);
                self.users.find_by_email(&email).await?.ok_or_else(|| {
                    AppError::InternalError(format!("충돌 후 사용자를 찾을 수 없습니다: {}", email))
                })
            }
            Err(e) => Err(e),
        }
    }
}
