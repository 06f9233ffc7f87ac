//! # 라우트 구성
//!
//! ```text
//! GET  /health
//! /auth   signup, signin, login-url/{provider}, token/{provider}, signout, verify
//! /user   (AuthMiddleware) 현재 사용자 정보, 역할
//! ```

use actix_web::middleware::Logger;
use actix_web::{error, web, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::domain::entities::users::user::Role;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg);
}

/// 본문/쿼리 역직렬화 실패도 `AppError` 형식의 400으로 응답합니다.
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let message = match &err {
            error::JsonPayloadError::Deserialize(e) => format!("요청 본문 형식 오류: {}", e),
            _ => "요청 본문을 읽을 수 없습니다".to_string(),
        };
        AppError::ValidationError(message).into()
    }));

    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("쿼리 파라미터 오류: {}", err)).into()
    }));
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::signup)
            .service(handlers::auth::signin)
            .service(handlers::auth::login_url)
            .service(handlers::auth::provider_token)
            .service(handlers::auth::signout)
            .service(handlers::auth::verify_token),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .wrap(AuthMiddleware::required_with_roles(vec![Role::User, Role::Seller]))
            .service(handlers::users::get_user_info)
            .service(handlers::users::get_user_role),
    );
}

/// 요청 로그 미들웨어
///
/// 쿼리 스트링에는 인가 코드와 state가 실리므로 메서드와 경로만 남깁니다.
pub fn request_logger() -> Logger {
    Logger::new(r#"%a "%{request}xi" %s %b "%{User-Agent}i" %T"#)
        .custom_request_replace("request", |req| format!("{} {}", req.method(), req.path()))
}

#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "parabole_auth",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use super::*;
    use crate::repositories::users::InMemoryUserRepository;
    use crate::services::auth::auth_pipeline::tests::{test_pipeline, test_providers, FakeExchanger};

    static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());

    struct CapturingLogger;

    impl log::Log for CapturingLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            CAPTURED.lock().unwrap().push(record.args().to_string());
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_validation_error() {
        let pipeline = test_pipeline(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(FakeExchanger::default()),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pipeline))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/signin")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "validation_error");
    }

    #[actix_web::test]
    async fn test_request_log_omits_authorization_code() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Info);

        let pipeline = test_pipeline(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(FakeExchanger::default()),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pipeline))
                .app_data(web::Data::from(test_providers()))
                .wrap(request_logger())
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/auth/token/kakao?code=valid-9f2c1e")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        drop(test::read_body(resp).await);

        let lines = CAPTURED.lock().unwrap().clone();
        assert!(lines.iter().any(|line| line.contains("GET /auth/token/kakao")));
        assert!(lines.iter().all(|line| !line.contains("valid-9f2c1e")));
    }
}
