//! # 인증 핸들러
//!
//! | Method | Path | 설명 |
//! |--------|------|------|
//! | POST | `/auth/signup` | 로컬 가입 (토큰 없음) |
//! | POST | `/auth/signin` | 로컬 로그인, 본문과 `Authorization` 헤더로 토큰 전달 |
//! | GET | `/auth/login-url/{provider}` | 소셜 로그인 URL + state |
//! | GET | `/auth/token/{provider}?code=&state=` | 소셜 로그인 콜백 |
//! | GET | `/auth/signout` | 무상태 로그아웃 |
//! | POST | `/auth/verify` | Bearer 토큰 검증 |
//!
//! ## 로그인 성공 응답
//! ```json
//! {
//!   "user": { "id": "...", "email": "a@x.com", "displayName": "Alice", "role": "USER", ... },
//!   "accessToken": "eyJ...",
//!   "tokenType": "Bearer",
//!   "expiresIn": 86400
//! }
//! ```

use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::config::{OAuthProviders, SocialProvider};
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{OAuthCallbackQuery, SigninRequest, SignupRequest};
use crate::domain::dto::users::response::{SigninResponse, TokenVerifyResponse, UserResponse};
use crate::services::auth::{AuthOutcome, AuthPipeline, NewLocalAccount, TokenService};

#[post("/signup")]
pub async fn signup(
    pipeline: web::Data<AuthPipeline>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let SignupRequest {
        email,
        password,
        display_name,
        nickname,
        phone,
        ..
    } = payload.into_inner();

    let user = pipeline
        .signup(NewLocalAccount {
            email,
            display_name,
            nickname,
            phone,
            raw_password: password,
        })
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[post("/signin")]
pub async fn signin(
    pipeline: web::Data<AuthPipeline>,
    payload: web::Json<SigninRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let outcome = pipeline.signin(&payload.email, &payload.password).await?;

    Ok(signin_response(outcome))
}

#[get("/login-url/{provider}")]
pub async fn login_url(
    pipeline: web::Data<AuthPipeline>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let provider = SocialProvider::from_str(&path.into_inner())?;
    let response = pipeline.login_url(provider)?;

    Ok(HttpResponse::Ok().json(response))
}

/// 소셜 로그인 콜백
///
/// `OAUTH_SUCCESS_REDIRECT_URI`가 설정되어 있으면 `302 Found`로 토큰을 넘기고,
/// 아니면 로컬 로그인과 같은 JSON으로 응답합니다.
#[get("/token/{provider}")]
pub async fn provider_token(
    pipeline: web::Data<AuthPipeline>,
    providers: web::Data<OAuthProviders>,
    path: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    let provider = SocialProvider::from_str(&path.into_inner())?;
    let query = query.into_inner();

    if let Some(error) = &query.error {
        log::warn!(
            "{} 인증 거부/실패: {} ({})",
            provider,
            error,
            query.error_description.as_deref().unwrap_or("-")
        );
        return Err(AppError::ProviderExchangeError(format!("{} returned {}", provider, error)));
    }

    let code = query
        .code
        .as_deref()
        .ok_or_else(|| AppError::ValidationError("Authorization code가 필요합니다".to_string()))?;

    let outcome = pipeline
        .provider_signin(provider, code, query.state.as_deref())
        .await?;

    if let Some(location) = providers.success_redirect_url(&outcome.token.access_token) {
        return Ok(HttpResponse::Found()
            .insert_header((header::LOCATION, location))
            .finish());
    }

    Ok(signin_response(outcome))
}

/// 서버는 세션을 저장하지 않으므로 클라이언트가 토큰을 버리면 로그아웃이 완료됩니다.
#[get("/signout")]
pub async fn signout() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "로그아웃 되었습니다. 클라이언트에 저장된 토큰을 삭제해 주세요"
    }))
}

#[post("/verify")]
pub async fn verify_token(
    req: HttpRequest,
    tokens: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::InvalidToken("Authorization 헤더가 없습니다".to_string()))?;

    let token = tokens.extract_bearer_token(auth_header)?;
    let claims = tokens.parse(token)?;

    Ok(HttpResponse::Ok().json(TokenVerifyResponse {
        valid: true,
        user_id: claims.sub,
        role: claims.role,
        expires_at: claims.exp,
    }))
}

fn signin_response(outcome: AuthOutcome) -> HttpResponse {
    let bearer = format!("Bearer {}", outcome.token.access_token);

    HttpResponse::Ok()
        .insert_header((header::AUTHORIZATION, bearer))
        .json(SigninResponse::new(outcome.user, outcome.token))
}
