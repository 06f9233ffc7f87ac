//! 사용자 저장소
//!
//! [`UserRepository`] 트레이트가 저장소 경계이며, MongoDB 구현과
//! 메모리 구현([`InMemoryUserRepository`](super::memory_repo::InMemoryUserRepository))이 있습니다.
//!
//! 이메일 유일성은 저장소가 보장합니다. `insert`가 같은 이메일과 충돌하면
//! 항상 `AppError::DuplicateEmail`을 반환하며, 호출자는 이를 보고 재조회합니다.

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::user::User;

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 저장된 그대로(대소문자 구분) 이메일로 조회
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 새 사용자 저장 후 ID가 채워진 사용자를 반환합니다.
    ///
    /// 같은 이메일이 이미 있으면 `DuplicateEmail`.
    async fn insert(&self, user: User) -> AppResult<User>;
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub const COLLECTION_NAME: &'static str = "users";

    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<User>(Self::COLLECTION_NAME),
        }
    }

    /// 이메일 unique 인덱스를 생성합니다. 시작 시 한 번 호출해야 합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("users 컬렉션 인덱스 생성 완료");
        Ok(())
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self.collection.insert_one(&user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::DuplicateEmail(user.email.clone())
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("insert 결과에 ObjectId가 없습니다".to_string())
        })?;

        user.id = Some(id);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mongodb::bson::from_document;
    use mongodb::error::{Error, WriteError};

    use super::*;

    fn write_error(code: i32) -> Error {
        let write_error: WriteError = from_document(doc! {
            "code": code,
            "errmsg": "E11000 duplicate key error collection: parabole.users index: email_unique",
        })
        .unwrap();

        Error::from(ErrorKind::Write(WriteFailure::WriteError(write_error)))
    }

    #[test]
    fn test_unique_index_conflict_is_duplicate_key() {
        assert!(is_duplicate_key(&write_error(DUPLICATE_KEY_CODE)));
    }

    #[test]
    fn test_other_errors_are_not_duplicate_key() {
        // document validation 실패
        assert!(!is_duplicate_key(&write_error(121)));

        let io = Error::from(ErrorKind::Io(Arc::new(std::io::Error::other("connection reset"))));
        assert!(!is_duplicate_key(&io));
    }
}
