use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;
use crate::repositories::users::UserRepository;

/// 인증된 사용자 본인 정보 조회
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// 토큰의 사용자 ID로 조회합니다. 토큰은 유효하지만 계정이 없으면 `NotFound`.
    pub async fn get_user_info(&self, user_id: &str) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }
}
