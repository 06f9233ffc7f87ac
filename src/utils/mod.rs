//! 공통 유틸리티
//!
//! - [`string_utils`] - 입력 문자열 검증/정리

pub mod string_utils;
