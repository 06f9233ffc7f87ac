//! # MongoDB 연결 관리
//!
//! 시작 시 한 번 연결하고 ping으로 연결을 확인합니다.
//! `Client`는 내부적으로 커넥션 풀을 가지므로 `Clone`으로 공유합니다.

use log::info;
use mongodb::{options::ClientOptions, Client};

use crate::config::DatabaseConfig;
use crate::core::errors::{AppError, AppResult};

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 변수(`MONGODB_URI`, `DATABASE_NAME`)로 연결합니다.
    pub async fn new() -> AppResult<Self> {
        Self::connect(&DatabaseConfig::uri(), &DatabaseConfig::database_name()).await
    }

    pub async fn connect(uri: &str, database_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client_options.app_name = Some("parabole_auth".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
