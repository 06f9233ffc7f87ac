//! User Entity Implementation
//!
//! 로컬 계정과 소셜(Kakao, Google) 계정을 하나로 표현하는 사용자 엔티티입니다.
//! 이메일당 정확히 하나의 사용자만 존재하며, 비밀번호 해시는 로컬 계정에만 있습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::config::{AuthProvider, SocialProvider};
use crate::domain::models::oauth::ProviderProfile;

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Seller,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Seller => "SELLER",
        }
    }

    /// `ROLE_USER` / `ROLE_SELLER` 형태의 권한 이름
    pub fn authority(&self) -> String {
        format!("ROLE_{}", self.as_str())
    }
}

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique, 저장된 그대로 대소문자 구분)
    pub email: String,
    /// 이름
    pub name: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// 해시된 비밀번호 (소셜 계정은 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    pub role: Role,
    pub auth_provider: AuthProvider,
    /// 프로바이더 측 사용자 ID (로컬 계정은 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성 (이메일/패스워드)
    pub fn new_local(
        email: String,
        name: String,
        nickname: String,
        phone: Option<String>,
        password_hash: String,
    ) -> Self {
        Self {
            id: None,
            email,
            name,
            nickname,
            phone,
            password_hash: Some(password_hash),
            role: Role::User,
            auth_provider: AuthProvider::Home,
            provider_user_id: None,
            image_url: None,
            created_at: DateTime::now(),
        }
    }

    /// 소셜 프로필로 새 사용자 생성
    ///
    /// 비밀번호 해시가 없으므로 이메일/비밀번호 로그인은 항상 실패합니다.
    pub fn new_provider(provider: SocialProvider, profile: ProviderProfile) -> Self {
        let ProviderProfile {
            provider_user_id,
            email,
            display_name,
            avatar_url,
        } = profile;

        Self {
            id: None,
            email,
            name: display_name.clone(),
            nickname: display_name,
            phone: None,
            password_hash: None,
            role: Role::User,
            auth_provider: provider.auth_provider(),
            provider_user_id: Some(provider_user_id),
            image_url: avatar_url,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 로컬 인증 사용자인지 확인
    pub fn is_local_auth(&self) -> bool {
        matches!(self.auth_provider, AuthProvider::Home)
    }

    /// 비밀번호 인증이 가능한 사용자인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.is_local_auth() && self.password_hash.is_some()
    }
}
