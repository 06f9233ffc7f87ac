//! 회원가입 요청 DTO
//!
//! ```json
//! {
//!   "email": "a@x.com",
//!   "password": "p1",
//!   "passwordConfirmation": "p1",
//!   "displayName": "Alice",
//!   "nickname": "al",
//!   "phone": "010-1234-5678"
//! }
//! ```
//!
//! `passwordConfirmation`(`confirm`)은 생략할 수 있지만, 보낸 경우 `password`와 같아야 합니다.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::utils::string_utils::deserialize_optional_string;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_password_confirmation"))]
pub struct SignupRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,

    #[serde(default, alias = "confirm")]
    pub password_confirmation: Option<String>,

    #[serde(alias = "name")]
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub display_name: String,

    #[validate(length(min = 1, max = 30, message = "닉네임은 1-30자 사이여야 합니다"))]
    pub nickname: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub phone: Option<String>,
}

fn validate_password_confirmation(req: &SignupRequest) -> Result<(), ValidationError> {
    match &req.password_confirmation {
        Some(confirmation) if confirmation != &req.password => Err(
            ValidationError::new("passwords_mismatch")
                .with_message("비밀번호가 일치하지 않습니다".into()),
        ),
        _ => Ok(()),
    }
}
