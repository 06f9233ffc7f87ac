//! # 문자열 유틸리티
//!
//! 가입 입력값(이메일, 이름, 닉네임, 전화번호) 정리에 쓰이는 함수들입니다.

use serde::Deserialize;

use crate::core::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 공백만 있으면 `ValidationError`, 아니면 앞뒤 공백을 제거해 반환합니다.
///
/// ```rust,ignore
/// assert_eq!(validate_required_string("  a@x.com ", "이메일").unwrap(), "a@x.com");
/// assert!(validate_required_string("   ", "이메일").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!(
            "{}은(는) 필수입니다",
            field_name
        )));
    }
    Ok(trimmed.to_string())
}

/// 선택 문자열 필드 정리. 비어 있으면 None.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `#[serde(deserialize_with = "deserialize_optional_string")]`용
///
/// `""`, `"   "`, `null`은 모두 None이 됩니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("a@x.com", "이메일").unwrap(), "a@x.com");
        assert_eq!(validate_required_string("  Alice  ", "이름").unwrap(), "Alice");

        assert!(validate_required_string("", "이메일").is_err());
        assert!(validate_required_string("\t\n", "닉네임").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(
            clean_optional_string(Some(" 010-1234-5678 ".to_string())),
            Some("010-1234-5678".to_string())
        );
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct Phone {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            phone: Option<String>,
        }

        let parsed: Phone = serde_json::from_str(r#"{"phone": "  010-0000-0000  "}"#).unwrap();
        assert_eq!(parsed.phone.as_deref(), Some("010-0000-0000"));

        let parsed: Phone = serde_json::from_str(r#"{"phone": ""}"#).unwrap();
        assert_eq!(parsed.phone, None);

        let parsed: Phone = serde_json::from_str(r#"{"phone": null}"#).unwrap();
        assert_eq!(parsed.phone, None);

        let parsed: Phone = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.phone, None);

        let parsed: Phone = serde_json::from_str(r#"{"phone": "  공일공  "}"#).unwrap();
        assert_eq!(parsed.phone.as_deref(), Some("공일공"));
    }
}
