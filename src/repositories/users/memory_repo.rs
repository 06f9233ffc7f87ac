//! 메모리 사용자 저장소
//!
//! `USER_STORE=memory`로 MongoDB 없이 실행할 때와 테스트에서 사용합니다.
//! 조회와 삽입이 같은 뮤텍스 아래에서 이루어지므로 이메일 중복 검사가 원자적입니다.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;
use crate::repositories::users::user_repo::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    /// email -> User
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<String, User>>> {
        self.users
            .lock()
            .map_err(|_| AppError::DatabaseError("user store lock poisoned".to_string()))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.lock()?.get(email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        Ok(self
            .lock()?
            .values()
            .find(|user| user.id == Some(object_id))
            .cloned())
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.lock()?;

        if users.contains_key(&user.email) {
            return Err(AppError::DuplicateEmail(user.email));
        }

        user.id = Some(ObjectId::new());
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }
}
