//! # Application Error Handling System
//!
//! 인증 파이프라인 전체에서 사용하는 통합 에러 타입입니다.
//! 각 단계(자격 증명 검증, OAuth 코드 교환, 프로필 조회, 계정 연결, 토큰 발급)의
//! 실패를 타입으로 구분하고, `actix_web::ResponseError` 구현을 통해
//! 일관된 HTTP 응답으로 변환합니다.
//!
//! ## 설계 원칙
//!
//! - **내부적으로는 구분, 외부로는 통일**: `NoSuchAccount`와 `InvalidCredentials`는
//!   내부 로그에서는 구분되지만 클라이언트에게는 같은 메시지로 응답합니다.
//!   (계정 존재 여부 노출 방지)
//! - **프로바이더 에러 은닉**: Kakao/Google 원본 에러는 로그에만 남고
//!   클라이언트에게는 "소셜 로그인 실패"만 전달됩니다.
//! - **요청 단위 실패**: 어떤 에러도 프로세스를 종료시키지 않으며 자동 재시도도 하지 않습니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 클라이언트 메시지 |
//! |----------|-------------|-------------------|
//! | `ValidationError` | 400 | 검증 메시지 그대로 |
//! | `DuplicateEmail` | 400 | 이미 사용 중인 이메일 |
//! | `NoSuchAccount` / `InvalidCredentials` | 400 | 동일한 로그인 실패 메시지 |
//! | `ProviderExchangeError` / `ProviderProfileError` | 400 | 소셜 로그인 실패 |
//! | `UnsupportedProvider` | 400 | 지원하지 않는 프로바이더 |
//! | `InvalidToken` / `ExpiredToken` | 401 | 토큰 오류 |
//! | `AuthorizationError` | 403 | 권한 부족 |
//! | `NotFound` | 404 | 메시지 그대로 |
//! | `DatabaseError` / `InternalError` | 500 | 일반 서버 오류 |

use actix_web::http::StatusCode;
use thiserror::Error;

/// 로그인 실패 시 클라이언트에게 전달되는 공통 메시지
pub const CREDENTIALS_MISMATCH_MESSAGE: &str = "이메일 또는 비밀번호가 일치하지 않습니다. 다시 입력해 주세요";

/// 소셜 로그인 실패 시 클라이언트에게 전달되는 공통 메시지
pub const SOCIAL_SIGNIN_FAILED_MESSAGE: &str = "소셜 로그인 실패";

/// 애플리케이션 전역 에러 타입
///
/// `Display` 구현(`thiserror`)은 로그용 내부 메시지이며,
/// 클라이언트에게는 [`AppError::client_message`]가 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 입력값 누락, 형식 오류 등 (400)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 이미 같은 이메일의 계정이 존재함 (400)
    #[error("Duplicate email: {0}")]
    DuplicateEmail(String),

    /// 해당 이메일의 계정이 없음 (400, 메시지는 InvalidCredentials와 동일)
    #[error("No such account: {0}")]
    NoSuchAccount(String),

    /// 비밀번호 불일치 또는 비밀번호 로그인이 불가능한 계정 (400)
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// 인가 코드 → 액세스 토큰 교환 실패 (400)
    #[error("Provider token exchange failed: {0}")]
    ProviderExchangeError(String),

    /// 프로바이더 사용자 프로필 조회/매핑 실패 (400)
    #[error("Provider profile fetch failed: {0}")]
    ProviderProfileError(String),

    /// 지원하지 않거나 설정되지 않은 소셜 프로바이더 (400)
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// 서명/형식이 올바르지 않은 세션 토큰 (401)
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// 만료된 세션 토큰 (401)
    #[error("Expired token")]
    ExpiredToken,

    /// 권한 부족 (403)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 리소스 없음 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 데이터베이스 오류 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 예상하지 못한 내부 오류 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 들어가는 기계 판독용 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_error",
            AppError::DuplicateEmail(_) => "duplicate_email",
            AppError::NoSuchAccount(_) | AppError::InvalidCredentials(_) => "invalid_credentials",
            AppError::ProviderExchangeError(_) | AppError::ProviderProfileError(_) => "social_signin_failed",
            AppError::UnsupportedProvider(_) => "unsupported_provider",
            AppError::InvalidToken(_) => "invalid_token",
            AppError::ExpiredToken => "token_expired",
            AppError::AuthorizationError(_) => "insufficient_permissions",
            AppError::NotFound(_) => "not_found",
            AppError::DatabaseError(_) | AppError::InternalError(_) => "internal_error",
        }
    }

    /// 클라이언트에게 노출해도 되는 메시지
    ///
    /// 계정 존재 여부나 프로바이더 원본 에러, 내부 장애 정보는 여기서 걸러집니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::ValidationError(msg) => msg.clone(),
            AppError::DuplicateEmail(_) => {
                "회원가입 시에 입력하신 이메일을 사용 중인 유저가 존재합니다. 다른 이메일로 가입해주세요.".to_string()
            }
            AppError::NoSuchAccount(_) | AppError::InvalidCredentials(_) => {
                CREDENTIALS_MISMATCH_MESSAGE.to_string()
            }
            AppError::ProviderExchangeError(_) | AppError::ProviderProfileError(_) => {
                SOCIAL_SIGNIN_FAILED_MESSAGE.to_string()
            }
            AppError::UnsupportedProvider(provider) => {
                format!("지원하지 않는 소셜 로그인입니다: {}", provider)
            }
            AppError::InvalidToken(_) => "유효하지 않은 토큰입니다".to_string(),
            AppError::ExpiredToken => "토큰이 만료되었습니다".to_string(),
            AppError::AuthorizationError(_) => "접근 권한이 부족합니다".to_string(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "서버 내부 오류가 발생했습니다".to_string()
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::DuplicateEmail(_)
            | AppError::NoSuchAccount(_)
            | AppError::InvalidCredentials(_)
            | AppError::ProviderExchangeError(_)
            | AppError::ProviderProfileError(_)
            | AppError::UnsupportedProvider(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidToken(_) | AppError::ExpiredToken => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 원인을 남기고, 클라이언트에는 일반 메시지만 보냅니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.code(),
                "message": self.client_message()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let cost = raw.parse::<u32>().context("bcrypt cost 파싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
