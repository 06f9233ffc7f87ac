use serde::{Deserialize, Serialize};

use crate::config::AuthProvider;
use crate::domain::entities::users::user::Role;

/// 세션 토큰(JWT) 클레임
///
/// 서버는 토큰을 저장하지 않으므로 서명과 `exp`만으로 유효성을 판단합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID (ObjectId hex)
    pub sub: String,
    pub role: Role,
    pub auth_provider: AuthProvider,
    pub iat: i64,
    pub exp: i64,
    /// 토큰 고유 ID (UUID v4)
    pub jti: String,
}

/// 발급된 세션 토큰
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub access_token: String,
    /// 항상 `Bearer`
    pub token_type: String,
    /// 만료까지 남은 초
    pub expires_in: i64,
}

/// OAuth `state` 파라미터 클레임
///
/// 로그인 URL을 발급한 프로바이더와 콜백 프로바이더가 같은지 확인하는 데 사용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthStateClaims {
    /// 소문자 프로바이더 이름 (`kakao`, `google`)
    pub provider: String,
    pub nonce: String,
    pub iat: i64,
    pub exp: i64,
}
