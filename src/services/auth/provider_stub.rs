//! 테스트용 로컬 프로바이더 서버
//!
//! 임의 포트(`127.0.0.1:0`)에 actix 서버를 띄워 Kakao/Google 엔드포인트를 흉내 냅니다.

use actix_web::{dev::ServerHandle, web, App, HttpServer};

use crate::config::ProviderSettings;

pub(crate) struct StubServer {
    pub base_url: String,
    handle: ServerHandle,
}

impl StubServer {
    /// 스텁 서버를 가리키는 프로바이더 설정
    pub fn settings(&self, client_secret: Option<&str>) -> ProviderSettings {
        ProviderSettings {
            client_id: "test-client".to_string(),
            client_secret: client_secret.map(str::to_string),
            redirect_uri: "http://localhost:8080/auth/token/test".to_string(),
            authorize_endpoint: format!("{}/oauth/authorize", self.base_url),
            token_endpoint: format!("{}/oauth/token", self.base_url),
            profile_endpoint: format!("{}/userinfo", self.base_url),
            scope: None,
        }
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

pub(crate) async fn spawn_stub<F>(configure: F) -> StubServer
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let server = HttpServer::new(move || App::new().configure(configure.clone()))
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .unwrap();

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    StubServer {
        base_url: format!("http://{}", addr),
        handle,
    }
}
