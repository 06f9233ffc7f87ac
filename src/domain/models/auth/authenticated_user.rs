//! 인증된 사용자 추출기
//!
//! [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가 토큰을 검증한 뒤
//! 요청 extensions에 넣어둔 사용자 정보를 핸들러 인자로 꺼냅니다.
//!
//! ```rust,ignore
//! #[get("")]
//! async fn get_user_info(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
//!     // user.user_id, user.role 사용
//! }
//! ```

use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};

use crate::config::AuthProvider;
use crate::core::errors::AppError;
use crate::domain::entities::users::user::Role;
use crate::domain::models::token::TokenClaims;

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub role: Role,
    pub auth_provider: AuthProvider,
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            role: claims.role,
            auth_provider: claims.auth_provider,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::InvalidToken(
                "인증되지 않은 요청입니다".to_string(),
            )
            .into())),
        }
    }
}
