//! # 인증 미들웨어
//!
//! 스코프 단위로 Bearer 토큰을 요구합니다.
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/user")
//!         .wrap(AuthMiddleware::required_with_roles(vec![Role::User, Role::Seller]))
//!         .service(handlers::users::get_user_info)
//! );
//! ```
//!
//! | 상황 | 응답 |
//! |------|------|
//! | 헤더 없음 / 형식 오류 / 서명 오류 | 401 `invalid_token` |
//! | 만료 | 401 `token_expired` |
//! | 역할 부족 | 403 `insufficient_permissions` |
//!
//! 토큰 검증은 앱 데이터에 등록된 `web::Data<TokenService>`를 사용합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};

use crate::domain::entities::users::user::Role;
use crate::domain::models::auth::RequiredRole;
use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware {
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    /// 유효한 토큰만 요구
    pub fn required() -> Self {
        Self { required_role: None }
    }

    pub fn required_with_role(role: Role) -> Self {
        Self {
            required_role: Some(RequiredRole::Single(role)),
        }
    }

    pub fn required_with_roles(roles: Vec<Role>) -> Self {
        Self {
            required_role: Some(RequiredRole::Any(roles)),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role.clone(),
        }))
    }
}
