use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use parabole_auth::config::{
    DatabaseConfig, OAuthConfig, OAuthProviders, ServerConfig, UserStoreKind,
};
use parabole_auth::core::errors::AppError;
use parabole_auth::db::Database;
use parabole_auth::repositories::users::{InMemoryUserRepository, MongoUserRepository, UserRepository};
use parabole_auth::routes::{configure_all_routes, request_logger};
use parabole_auth::services::auth::{
    provider_http_client, AuthPipeline, BcryptPasswordHasher, HttpOAuthExchanger,
    HttpProfileFetcher, OAuthStateSigner, TokenService,
};
use parabole_auth::services::users::UserService;

#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

/// 시작 시 한 번 생성되어 모든 워커가 공유하는 구성 요소
struct AppComponents {
    pipeline: web::Data<AuthPipeline>,
    tokens: web::Data<TokenService>,
    users: web::Data<UserService>,
    providers: web::Data<OAuthProviders>,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 파라볼 인증 서비스 시작중...");

    let components = build_components().await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(components).await
}

async fn build_components() -> Result<AppComponents, AppError> {
    let users = initialize_user_store().await?;

    let providers = Arc::new(OAuthProviders::from_env());
    let http_client = provider_http_client(OAuthConfig::http_timeout())?;
    let tokens = Arc::new(TokenService::from_config());
    let hasher = Arc::new(BcryptPasswordHasher::from_config());

    let pipeline = AuthPipeline::new(
        users.clone(),
        hasher,
        Arc::new(HttpOAuthExchanger::new(http_client.clone(), providers.clone())),
        Arc::new(HttpProfileFetcher::new(http_client, providers.clone())),
        tokens.clone(),
        Arc::new(OAuthStateSigner::from_config()),
        providers.clone(),
    );

    Ok(AppComponents {
        pipeline: web::Data::new(pipeline),
        tokens: web::Data::from(tokens),
        users: web::Data::new(UserService::new(users)),
        providers: web::Data::from(providers),
    })
}

async fn initialize_user_store() -> Result<Arc<dyn UserRepository>, AppError> {
    match DatabaseConfig::user_store() {
        UserStoreKind::Memory => {
            info!("💾 메모리 사용자 저장소 사용 (재시작 시 데이터 유실)");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        UserStoreKind::Mongo => {
            info!("📡 데이터베이스 연결 중...");
            let database = Database::new().await?;

            let repo = MongoUserRepository::new(&database);
            repo.create_indexes().await?;

            Ok(Arc::new(repo))
        }
    }
}

async fn start_http_server(components: AppComponents) -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("rate limit 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let AppComponents {
        pipeline,
        tokens,
        users,
        providers,
    } = components;

    HttpServer::new(move || {
        App::new()
            .app_data(pipeline.clone())
            .app_data(tokens.clone())
            .app_data(users.clone())
            .app_data(providers.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(request_logger())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("https://parabole.shop")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // 로그인 응답의 Authorization 헤더를 브라우저에서 읽을 수 있도록
        .expose_headers(vec![header::AUTHORIZATION, header::LOCATION])
        .supports_credentials()
        .max_age(3600)
}

fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
