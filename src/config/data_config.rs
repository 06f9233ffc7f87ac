//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 비밀번호 해싱 비용, 서버 바인딩, 사용자 저장소 설정을 관리합니다.

use std::env;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()),
        )
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt cost (4-15). `BCRYPT_COST`가 범위 밖이면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }
}

/// 사용자 저장소 종류
#[derive(Debug, Clone, PartialEq)]
pub enum UserStoreKind {
    Mongo,
    /// 프로세스 메모리 (로컬 개발용, 재시작 시 소멸)
    Memory,
}

pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "parabole_dev".to_string())
    }

    pub fn user_store() -> UserStoreKind {
        Self::user_store_from_str(&env::var("USER_STORE").unwrap_or_default())
    }

    pub fn user_store_from_str(s: &str) -> UserStoreKind {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" => UserStoreKind::Memory,
            _ => UserStoreKind::Mongo,
        }
    }
}
