use serde::Serialize;

use crate::config::AuthProvider;
use crate::domain::entities::users::user::{Role, User};
use crate::domain::models::token::SessionToken;

/// 사용자 요약 정보
///
/// 비밀번호 해시와 프로바이더 사용자 ID는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: Role,
    pub auth_provider: AuthProvider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// RFC 3339
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let id = user.id_string().unwrap_or_default();
        let created_at = user.created_at.try_to_rfc3339_string().unwrap_or_default();

        let User {
            email,
            name,
            nickname,
            phone,
            role,
            auth_provider,
            image_url,
            ..
        } = user;

        Self {
            id,
            email,
            display_name: name,
            nickname,
            phone,
            role,
            auth_provider,
            image_url,
            created_at,
        }
    }
}

/// 로그인 성공 응답 (로컬/소셜 공통)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl SigninResponse {
    pub fn new(user: User, token: SessionToken) -> Self {
        Self {
            user: user.into(),
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
        }
    }
}

/// `GET /user` 응답
#[derive(Debug, Clone, Serialize)]
pub struct UserInfoResponse {
    pub email: String,
    pub name: String,
    pub nickname: String,
    pub role: Role,
}

impl From<User> for UserInfoResponse {
    fn from(user: User) -> Self {
        Self {
            email: user.email,
            name: user.name,
            nickname: user.nickname,
            role: user.role,
        }
    }
}

/// `GET /user/role` 응답
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    /// `ROLE_USER` / `ROLE_SELLER`
    pub role: String,
    pub user_id: String,
}

/// `POST /auth/verify` 응답
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenVerifyResponse {
    pub valid: bool,
    pub user_id: String,
    pub role: Role,
    pub expires_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_user_response_hides_password_hash() {
        let mut user = User::new_local(
            "a@x.com".to_string(),
            "Alice".to_string(),
            "al".to_string(),
            None,
            "$2b$04$secret-hash".to_string(),
        );
        user.id = Some(ObjectId::new());

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["displayName"], "Alice");
        assert_eq!(json["role"], "USER");
        assert_eq!(json["authProvider"], "HOME");
        assert!(json.get("phone").is_none());
        assert!(!json.to_string().contains("secret-hash"));
    }

    #[test]
    fn test_signin_response_shape() {
        let user = User::new_local(
            "a@x.com".to_string(),
            "Alice".to_string(),
            "al".to_string(),
            None,
            "hash".to_string(),
        );
        let token = SessionToken {
            access_token: "jwt".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
        };

        let json = serde_json::to_value(SigninResponse::new(user, token)).unwrap();

        assert_eq!(json["accessToken"], "jwt");
        assert_eq!(json["tokenType"], "Bearer");
        assert_eq!(json["expiresIn"], 3600);
        assert_eq!(json["user"]["nickname"], "al");
    }
}
