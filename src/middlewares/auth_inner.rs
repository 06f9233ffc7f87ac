use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::core::errors::{AppError, AppResult};
use crate::domain::models::auth::{AuthenticatedUser, RequiredRole};
use crate::services::auth::TokenService;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let user = match authenticate(&req) {
                Ok(user) => user,
                Err(err) => {
                    log::warn!("인증 실패: {} {} - {}", req.method(), req.path(), err);
                    return Ok(reject(req, err));
                }
            };

            if let Some(required) = &required_role {
                if !required.is_satisfied(user.role) {
                    log::warn!(
                        "권한 부족: 사용자 ID {} ({:?}), 필요 권한: {:?}",
                        user.user_id,
                        user.role,
                        required
                    );
                    let err = AppError::AuthorizationError(format!("{:?}", required));
                    return Ok(reject(req, err));
                }
            }

            log::debug!("인증 성공: 사용자 ID {}", user.user_id);
            req.extensions_mut().insert(user);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn authenticate(req: &ServiceRequest) -> AppResult<AuthenticatedUser> {
    let tokens = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::InternalError("TokenService가 등록되지 않았습니다".to_string()))?;

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::InvalidToken("Authorization 헤더가 없습니다".to_string()))?;

    let token = tokens.extract_bearer_token(auth_header)?;
    let claims = tokens.parse(token)?;

    Ok(AuthenticatedUser::from(claims))
}

fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, err.error_response()).map_into_right_body()
}
