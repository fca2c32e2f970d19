//! Shared utilities for integration tests: a programmable mock upstream and
//! a helper that starts the proxy against it.

#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use flickr_proxy::config::ProxyConfig;
use flickr_proxy::http::{AppState, HttpServer};
use flickr_proxy::lifecycle::Shutdown;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub const TEST_API_KEY: &str = "test-key";

pub type Params = HashMap<String, String>;

/// What the mock upstream answers for one call.
pub struct MockReply {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl MockReply {
    pub fn json(body: Value) -> Self {
        Self::raw(200, body.to_string())
    }

    pub fn raw(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type Responder = Arc<dyn Fn(&Params) -> MockReply + Send + Sync>;

#[derive(Clone)]
struct MockState {
    responder: Responder,
    calls: Arc<Mutex<Vec<Params>>>,
    finished: Arc<AtomicUsize>,
}

/// A running mock upstream.
pub struct MockUpstream {
    pub addr: SocketAddr,
    calls: Arc<Mutex<Vec<Params>>>,
    finished: Arc<AtomicUsize>,
}

impl MockUpstream {
    pub fn base_url(&self) -> String {
        format!("http://{}/services/rest/", self.addr)
    }

    /// Query parameters of every call received so far.
    pub fn calls(&self) -> Vec<Params> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Calls whose reply has been fully produced (after any delay).
    pub fn finished_count(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }
}

async fn handle(State(state): State<MockState>, Query(params): Query<Params>) -> (StatusCode, String) {
    state.calls.lock().unwrap().push(params.clone());
    let reply = (state.responder)(&params);
    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }
    state.finished.fetch_add(1, Ordering::SeqCst);
    (
        StatusCode::from_u16(reply.status).unwrap(),
        reply.body,
    )
}

/// Start a mock upstream on an ephemeral port.
pub async fn start_mock_upstream<F>(responder: F) -> MockUpstream
where
    F: Fn(&Params) -> MockReply + Send + Sync + 'static,
{
    let calls = Arc::new(Mutex::new(Vec::new()));
    let finished = Arc::new(AtomicUsize::new(0));
    let state = MockState {
        responder: Arc::new(responder),
        calls: calls.clone(),
        finished: finished.clone(),
    };

    let app = Router::new()
        .route("/services/rest/", get(handle))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockUpstream {
        addr,
        calls,
        finished,
    }
}

/// A running proxy instance.
pub struct TestProxy {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestProxy {
    pub fn api_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestProxy {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the proxy against `upstream`.
pub async fn start_proxy(upstream: &MockUpstream) -> TestProxy {
    let mut config = ProxyConfig::default();
    config.upstream.api_key = TEST_API_KEY.to_string();
    config.upstream.base_url = upstream.base_url();
    config.listener.host = "127.0.0.1".into();
    config.listener.port = 0;

    let state = AppState::with_http_client(config, http_client()).unwrap();
    let server = HttpServer::from_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    TestProxy { addr, shutdown }
}

pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

// ---------------------------------------------------------------------------
// Canned upstream payloads
// ---------------------------------------------------------------------------

pub fn search_body(pages: i64, photos: &[(&str, &str)]) -> Value {
    let photo: Vec<Value> = photos
        .iter()
        .map(|(id, title)| json!({"id": id, "title": title, "owner": "x", "ispublic": 1}))
        .collect();
    json!({
        "photos": {"page": 1, "pages": pages, "perpage": 16, "total": "100", "photo": photo},
        "stat": "ok"
    })
}

pub fn sizes_body(sizes: &[(&str, &str)]) -> Value {
    let size: Vec<Value> = sizes
        .iter()
        .map(|(label, source)| json!({"label": label, "source": source, "width": 500}))
        .collect();
    json!({"sizes": {"canblog": 0, "size": size}, "stat": "ok"})
}

pub fn info_body(id: &str, title: &str, posted: &str, tags: &[&str]) -> Value {
    let tag: Vec<Value> = tags
        .iter()
        .map(|raw| json!({"id": "t", "raw": raw, "_content": raw.to_lowercase()}))
        .collect();
    json!({
        "photo": {
            "id": id,
            "title": {"_content": title},
            "description": {"_content": format!("About {}", title)},
            "dates": {"posted": posted, "taken": "2020-01-01 00:00:00"},
            "tags": {"tag": tag}
        },
        "stat": "ok"
    })
}

/// Medium and original renditions whose URLs embed the photo id.
pub fn standard_sizes(id: &str) -> Value {
    let square = format!("https://img/{}_s.jpg", id);
    let medium = format!("https://img/{}_m.jpg", id);
    let original = format!("https://img/{}_o.jpg", id);
    sizes_body(&[
        ("Square", square.as_str()),
        ("Medium", medium.as_str()),
        ("Original", original.as_str()),
    ])
}

pub fn param<'a>(params: &'a Params, name: &str) -> &'a str {
    params.get(name).map(String::as_str).unwrap_or_default()
}
