//! In-process mock of the platform API.
//!
//! Binds an Axum router on an ephemeral port, records every request and
//! answers from a table of canned replies keyed by method and path.

#![allow(clippy::unwrap_used, dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use serde_json::Value;
use velg_client::{ApiClient, AppState, ClientConfig};

/// One request as the server saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Inner {
    replies: BTreeMap<(String, String), (u16, String)>,
    requests: Vec<Recorded>,
}

/// Handle to a running mock server.
#[derive(Clone)]
pub struct MockApi {
    inner: Arc<Mutex<Inner>>,
    pub base_url: String,
}

impl MockApi {
    pub async fn start() -> Self {
        let inner = Arc::new(Mutex::new(Inner::default()));
        let app = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&inner));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self {
            inner,
            base_url: format!("http://{addr}/api/v1"),
        }
    }

    /// Answer `method path` with a JSON body.
    pub fn reply(&self, method: &Method, path: &str, status: u16, body: &Value) {
        self.reply_raw(method, path, status, &body.to_string());
    }

    /// Answer `method path` with a raw body.
    pub fn reply_raw(&self, method: &Method, path: &str, status: u16, body: &str) {
        self.inner.lock().unwrap().replies.insert(
            (method.to_string(), path.to_owned()),
            (status, body.to_owned()),
        );
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests().pop().unwrap()
    }

    /// A client for this server with a fresh session.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(ClientConfig::with_base_url(&self.base_url), AppState::new()).unwrap()
    }
}

async fn handle(
    State(inner): State<Arc<Mutex<Inner>>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, [(&'static str, &'static str); 1], String) {
    let recorded = Recorded {
        method: method.clone(),
        path: uri.path().to_owned(),
        query: uri.query().map(ToOwned::to_owned),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned),
        body: serde_json::from_slice(&body).ok(),
    };
    let mut inner = inner.lock().unwrap();
    let reply = inner
        .replies
        .get(&(method.to_string(), recorded.path.clone()))
        .cloned()
        .unwrap_or((404, String::from(r#"{"detail":"Not Found"}"#)));
    inner.requests.push(recorded);
    (
        StatusCode::from_u16(reply.0).unwrap(),
        [("content-type", "application/json")],
        reply.1,
    )
}

/// `{ "success": true, "data": data }`.
pub fn ok(data: Value) -> Value {
    serde_json::json!({ "success": true, "data": data })
}

pub fn simulation_json(id: &str, name: &str) -> Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "slug": name.to_lowercase().replace(' ', "-"),
        "description": null,
        "theme": "dystopian",
        "status": "active",
        "content_locale": "en",
        "additional_locales": [],
        "owner_id": null,
        "created_at": "2026-02-16T09:05:00Z",
        "updated_at": "2026-02-16T09:05:00Z"
    })
}

pub fn echo_json(id: &str, status: &str) -> Value {
    serde_json::json!({
        "id": id,
        "source_event_id": "0195a1f0-0000-7000-8000-000000000001",
        "source_simulation_id": "0195a1f0-0000-7000-8000-000000000002",
        "target_simulation_id": "0195a1f0-0000-7000-8000-000000000003",
        "target_event_id": null,
        "echo_vector": "dream",
        "echo_strength": 0.8,
        "echo_depth": 1,
        "root_event_id": null,
        "status": status,
        "bleed_metadata": null,
        "created_at": "2026-02-16T09:05:00Z",
        "updated_at": "2026-02-16T09:05:00Z"
    })
}
