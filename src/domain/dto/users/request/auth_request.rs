use serde::Deserialize;
use validator::Validate;

/// 이메일/비밀번호 로그인 요청
#[derive(Debug, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(length(min = 1, message = "이메일을 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 소셜 로그인 콜백 쿼리 (`?code=&state=`)
///
/// 사용자가 동의를 거부하면 프로바이더는 `code` 대신 `error`를 보냅니다.
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}
