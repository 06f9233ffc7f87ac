//! # 사용자 핸들러
//!
//! `/user` 스코프는 [`AuthMiddleware`](crate::middlewares::AuthMiddleware) 뒤에 있으므로
//! 핸들러에 도달한 요청은 항상 유효한 토큰을 가지고 있습니다.

use actix_web::{get, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::response::{RoleResponse, UserInfoResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::users::UserService;

/// 현재 사용자 정보
///
/// `GET /user`
///
/// ```json
/// { "email": "a@x.com", "name": "Alice", "nickname": "al", "role": "USER" }
/// ```
#[get("")]
pub async fn get_user_info(
    user: AuthenticatedUser,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let found = service.get_user_info(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(UserInfoResponse::from(found)))
}

/// 현재 사용자 역할
///
/// `GET /user/role`
#[get("/role")]
pub async fn get_user_role(user: AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(RoleResponse {
        role: user.role.authority(),
        user_id: user.user_id,
    })
}
