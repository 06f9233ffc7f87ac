//! 세션 토큰 발급/검증
//!
//! HS256 서명 JWT를 사용합니다. 서버는 토큰을 저장하지 않으므로 로그아웃은
//! 클라이언트가 토큰을 버리는 것으로 끝나며, 유효성은 서명과 만료 시간만으로 판단합니다.
//! 만료 검사에는 leeway를 두지 않습니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::User;
use crate::domain::models::token::{SessionToken, TokenClaims};

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
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

    /// `JWT_SECRET`, `JWT_EXPIRATION_HOURS`로 생성
    pub fn from_config() -> Self {
        Self::new(&JwtConfig::secret(), Duration::hours(JwtConfig::expiration_hours()))
    }

    pub fn issue(&self, user: &User) -> AppResult<SessionToken> {
        self.issue_at(user, Utc::now())
    }

    /// `now` 시점에 발급된 토큰을 생성합니다.
    pub(crate) fn issue_at(&self, user: &User, now: DateTime<Utc>) -> AppResult<SessionToken> {
        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("저장되지 않은 사용자에게 토큰을 발급할 수 없습니다".to_string()))?;

        let claims = TokenClaims {
            sub: user_id,
            role: user.role,
            auth_provider: user.auth_provider,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))?;

        Ok(SessionToken {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.ttl.num_seconds(),
        })
    }

    /// 서명과 만료를 검사하고 클레임을 반환합니다.
    pub fn parse(&self, token: &str) -> AppResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::ExpiredToken,
                _ => AppError::InvalidToken(e.to_string()),
            })
    }

    /// `Authorization` 헤더 값에서 토큰 부분을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::InvalidToken("유효하지 않은 인증 헤더 형식입니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProvider;
    use crate::domain::entities::users::user::Role;
    use mongodb::bson::oid::ObjectId;

    fn saved_user() -> User {
        let mut user = User::new_local(
            "a@x.com".to_string(),
            "Alice".to_string(),
            "al".to_string(),
            None,
            "hash".to_string(),
        );
        user.id = Some(ObjectId::new());
        user
    }

    fn service() -> TokenService {
        TokenService::new("test-secret", Duration::hours(1))
    }

    #[test]
    fn test_issue_then_parse() {
        let tokens = service();
        let user = saved_user();

        let session = tokens.issue(&user).unwrap();
        let claims = tokens.parse(&session.access_token).unwrap();

        assert_eq!(session.token_type, "Bearer");
        assert_eq!(session.expires_in, 3600);
        assert_eq!(claims.sub, user.id_string().unwrap());
        assert_eq!(claims.role, Role::User);
        assert_eq!(claims.auth_provider, AuthProvider::Home);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token() {
        let tokens = service();
        let issued_at = Utc::now() - Duration::hours(2);

        let session = tokens.issue_at(&saved_user(), issued_at).unwrap();

        assert!(matches!(tokens.parse(&session.access_token), Err(AppError::ExpiredToken)));
    }

    #[test]
    fn test_expired_by_one_second_has_no_leeway() {
        let tokens = service();
        let issued_at = Utc::now() - Duration::hours(1) - Duration::seconds(5);

        let session = tokens.issue_at(&saved_user(), issued_at).unwrap();

        assert!(matches!(tokens.parse(&session.access_token), Err(AppError::ExpiredToken)));
    }

    #[test]
    fn test_tampered_or_foreign_token() {
        let tokens = service();
        let session = tokens.issue(&saved_user()).unwrap();

        let other = TokenService::new("other-secret", Duration::hours(1));
        assert!(matches!(other.parse(&session.access_token), Err(AppError::InvalidToken(_))));

        let mut tampered = session.access_token.clone();
        tampered.push('x');
        assert!(matches!(tokens.parse(&tampered), Err(AppError::InvalidToken(_))));

        assert!(matches!(tokens.parse("not.a.jwt"), Err(AppError::InvalidToken(_))));
    }

    #[test]
    fn test_unsaved_user_cannot_get_token() {
        let mut user = saved_user();
        user.id = None;
        assert!(matches!(service().issue(&user), Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_token_ids_are_unique() {
        let tokens = service();
        let user = saved_user();

        let first = tokens.parse(&tokens.issue(&user).unwrap().access_token).unwrap();
        let second = tokens.parse(&tokens.issue(&user).unwrap().access_token).unwrap();

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_extract_bearer_token() {
        let tokens = service();
        assert_eq!(tokens.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(tokens.extract_bearer_token("Basic abc").is_err());
        assert!(tokens.extract_bearer_token("Bearer ").is_err());
    }
}
