//! Stub upstream provider for integration tests.
//!
//! Serves canned replies by request path from a real Actix server bound to
//! `127.0.0.1:0`, and records every path and query it receives.

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use discovery::DiscoverySettings;
use serde_json::Value;

/// Canned answer for one path.
#[derive(Clone)]
pub enum StubReply {
    /// 200 with a JSON body.
    Json(Value),
    /// The given status with a short text body.
    Status(u16),
    /// 200 with a raw body labelled as JSON.
    Raw(&'static str),
    /// 200 with a JSON body after a delay.
    Slow(Duration, Value),
}

struct StubState {
    routes: HashMap<String, StubReply>,
    requests: Mutex<Vec<String>>,
}

/// Running stub server.
pub struct StubUpstream {
    base_url: String,
    handle: ServerHandle,
    state: Arc<StubState>,
}

impl StubUpstream {
    /// Start a server answering `routes`; unknown paths get 404.
    pub fn start(routes: impl IntoIterator<Item = (&'static str, StubReply)>) -> Self {
        let state = Arc::new(StubState {
            routes: routes
                .into_iter()
                .map(|(path, reply)| (path.to_owned(), reply))
                .collect(),
            requests: Mutex::new(Vec::new()),
        });
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let addr = listener.local_addr().expect("stub address");
        let data = web::Data::from(Arc::clone(&state));

        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .default_service(web::to(respond))
        })
        .disable_signals()
        .workers(1)
        .listen(listener)
        .expect("listen on stub socket")
        .run();

        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            base_url: format!("http://{addr}"),
            handle,
            state,
        }
    }

    /// Root URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Every `path?query` received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().expect("request log lock").clone()
    }

    /// Number of requests whose path equals `path`.
    pub fn hits(&self, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|request| request.split('?').next() == Some(path))
            .count()
    }

    /// Stop accepting connections.
    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn respond(request: HttpRequest, state: web::Data<StubState>) -> HttpResponse {
    let path = request.path().to_owned();
    state
        .requests
        .lock()
        .expect("request log lock")
        .push(format!("{path}?{}", request.query_string()));

    match state.routes.get(&path).cloned() {
        Some(StubReply::Json(body)) => HttpResponse::Ok().json(body),
        Some(StubReply::Status(code)) => {
            let status = StatusCode::from_u16(code).expect("valid status code");
            HttpResponse::build(status).body("stubbed upstream failure")
        }
        Some(StubReply::Raw(body)) => HttpResponse::Ok()
            .content_type("application/json")
            .body(body),
        Some(StubReply::Slow(delay, body)) => {
            actix_web::rt::time::sleep(delay).await;
            HttpResponse::Ok().json(body)
        }
        None => HttpResponse::NotFound().finish(),
    }
}

/// Settings pointing every provider at `base_url`, with keys configured
/// and a short request deadline.
pub fn settings_for(base_url: &str) -> DiscoverySettings {
    DiscoverySettings {
        rest_countries_base_url: Some(base_url.to_owned()),
        openweather_base_url: Some(base_url.to_owned()),
        openweather_api_key: Some("weather-key".to_owned()),
        unsplash_base_url: Some(base_url.to_owned()),
        unsplash_access_key: Some("photo-key".to_owned()),
        opentripmap_base_url: Some(base_url.to_owned()),
        opentripmap_api_key: Some("places-key".to_owned()),
        request_timeout_ms: Some(500),
        image_search_timeout_ms: Some(500),
    }
}

/// Settings pointing every provider at `base_url` with no usable keys.
pub fn unconfigured_settings_for(base_url: &str) -> DiscoverySettings {
    DiscoverySettings {
        openweather_api_key: None,
        unsplash_access_key: Some("your_unsplash_key_here".to_owned()),
        opentripmap_api_key: Some(String::new()),
        ..settings_for(base_url)
    }
}
