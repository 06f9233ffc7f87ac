use serde::Serialize;

use crate::config::SocialProvider;

/// 소셜 로그인 URL 응답
///
/// 클라이언트는 `loginUrl`로 이동하고, 콜백에서 받은 `state`를 그대로
/// `/auth/token/{provider}`에 전달합니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUrlResponse {
    pub provider: SocialProvider,
    pub login_url: String,
    pub state: String,
}
