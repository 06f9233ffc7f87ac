use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;
use crate::repositories::users::UserRepository;
use crate::services::auth::password_hasher::PasswordHasher;

/// 이메일/비밀번호 검증기 (읽기 전용)
///
/// 계정이 없으면 `NoSuchAccount`, 해시가 없는 소셜 계정이거나 비밀번호가 다르면
/// `InvalidCredentials`입니다. 두 에러는 클라이언트에게 같은 메시지로 나갑니다.
pub struct CredentialVerifier {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl CredentialVerifier {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    pub async fn verify(&self, email: &str, candidate_password: &str) -> AppResult<User> {
        // 가입 시 저장된 형태와 맞춤
        let email = email.trim();

        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NoSuchAccount(email.to_string()))?;

        let password_hash = match (&user.password_hash, user.can_authenticate_with_password()) {
            (Some(hash), true) => hash,
            _ => {
                log::warn!(
                    "비밀번호 로그인이 불가능한 계정: {} ({:?})",
                    email,
                    user.auth_provider
                );
                return Err(AppError::InvalidCredentials(email.to_string()));
            }
        };

        if !self.hasher.verify(candidate_password, password_hash).await? {
            return Err(AppError::InvalidCredentials(email.to_string()));
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SocialProvider;
    use crate::domain::models::oauth::ProviderProfile;
    use crate::repositories::users::InMemoryUserRepository;
    use crate::services::auth::password_hasher::BcryptPasswordHasher;

    async fn setup() -> (CredentialVerifier, Arc<InMemoryUserRepository>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let hasher = Arc::new(BcryptPasswordHasher::new(4));

        let hash = hasher.hash("p1").await.unwrap();
        repo.insert(User::new_local(
            "a@x.com".to_string(),
            "Alice".to_string(),
            "al".to_string(),
            None,
            hash,
        ))
        .await
        .unwrap();

        repo.insert(User::new_provider(
            SocialProvider::Kakao,
            ProviderProfile {
                provider_user_id: "4242".to_string(),
                email: "b@x.com".to_string(),
                display_name: "Bob".to_string(),
                avatar_url: None,
            },
        ))
        .await
        .unwrap();

        (CredentialVerifier::new(repo.clone(), hasher), repo)
    }

    #[actix_web::test]
    async fn test_verify_success() {
        let (verifier, _) = setup().await;
        let user = verifier.verify("a@x.com", "p1").await.unwrap();
        assert_eq!(user.email, "a@x.com");
    }

    #[actix_web::test]
    async fn test_verify_trims_email() {
        let (verifier, _) = setup().await;
        let user = verifier.verify("  a@x.com\t", "p1").await.unwrap();
        assert_eq!(user.email, "a@x.com");
    }

    #[actix_web::test]
    async fn test_wrong_password() {
        let (verifier, _) = setup().await;
        assert!(matches!(
            verifier.verify("a@x.com", "p2").await,
            Err(AppError::InvalidCredentials(_))
        ));
    }

    #[actix_web::test]
    async fn test_unknown_email() {
        let (verifier, _) = setup().await;
        assert!(matches!(
            verifier.verify("nobody@x.com", "p1").await,
            Err(AppError::NoSuchAccount(_))
        ));
    }

    #[actix_web::test]
    async fn test_provider_account_always_fails() {
        let (verifier, _) = setup().await;
        for candidate in ["", "p1", "anything"] {
            assert!(matches!(
                verifier.verify("b@x.com", candidate).await,
                Err(AppError::InvalidCredentials(_))
            ));
        }
    }
}
