//! In-process mock of the academy REST backend.
//!
//! Each test starts its own server on an ephemeral port, so tests can run
//! in parallel without sharing records. Collections behave like the real
//! backend: `/admin` and `/all` suffixes list everything and need a bearer
//! token, the bare path lists active records anonymously.

use academy_core::api::{ApiClient, PublicCache};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header::AUTHORIZATION, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Token the mock accepts as an admin credential.
pub const ADMIN_TOKEN: &str = "test-admin-token";
pub const ADMIN_PASSWORD: &str = "correct-password";

const COLLECTIONS: [&str; 7] = [
    "/api/PackageCategories",
    "/api/Packages",
    "/api/Teachers",
    "/api/Testimonials",
    "/api/Faqs",
    "/api/Applications",
    "/api/SiteContent",
];

/// One request as the mock saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub bearer: Option<String>,
    pub body: Value,
}

#[derive(Default)]
struct MockState {
    records: Mutex<HashMap<String, Vec<Value>>>,
    next_id: Mutex<i64>,
    failures: Mutex<HashMap<(String, String), (u16, String)>>,
    requests: Mutex<Vec<Recorded>>,
    profile: Mutex<Value>,
}

pub struct MockBackend {
    pub url: String,
    state: Arc<MockState>,
    _server: tokio::task::JoinHandle<()>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let state = Arc::new(MockState::default());
        *state.next_id.lock().unwrap() = 100;
        *state.profile.lock().unwrap() =
            json!({ "id": 1, "name": "Site Admin", "email": "admin@academy.com" });

        let app = Router::new().fallback(handle).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("mock backend has no address");
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend stopped");
        });

        Self {
            url: format!("http://{addr}"),
            state,
            _server: server,
        }
    }

    /// Anonymous client, no memoization.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.url)
    }

    pub fn admin_client(&self) -> ApiClient {
        self.client().with_token(ADMIN_TOKEN)
    }

    /// Anonymous client with a public cache.
    pub fn cached_client(&self, cache: PublicCache) -> ApiClient {
        self.client().with_cache(cache)
    }

    pub fn cache() -> PublicCache {
        PublicCache::new(Duration::from_secs(60))
    }

    /// Store records under a collection path, assigning ids where missing.
    pub fn seed(&self, collection: &str, records: Vec<Value>) {
        let mut stored = self.state.records.lock().unwrap();
        let entry = stored.entry(collection.to_string()).or_default();
        for mut record in records {
            if record.get("id").map_or(true, Value::is_null) {
                record["id"] = json!(self.state.allocate_id());
            }
            entry.push(record);
        }
    }

    pub fn records(&self, collection: &str) -> Vec<Value> {
        self.state
            .records
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Answer `method path` with a fixed status and body from now on.
    pub fn fail(&self, method: &str, path: &str, status: u16, body: &str) {
        self.state.failures.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            (status, body.to_string()),
        );
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn hits(&self, method: &str, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn profile(&self) -> Value {
        self.state.profile.lock().unwrap().clone()
    }
}

impl MockState {
    fn allocate_id(&self) -> i64 {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        *next
    }
}

fn not_found(what: &str) -> Response {
    (StatusCode::NOT_FOUND, format!("{what} not found")).into_response()
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string);
    let json_body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    state.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        bearer: bearer.clone(),
        body: json_body.clone(),
    });

    let failure = state
        .failures
        .lock()
        .unwrap()
        .get(&(method.to_string(), path.clone()))
        .cloned();
    if let Some((status, body)) = failure {
        return (StatusCode::from_u16(status).unwrap(), body).into_response();
    }

    if path == "/api/Auth/login" && method == Method::POST {
        return if json_body["password"] == ADMIN_PASSWORD {
            Json(json!({ "token": ADMIN_TOKEN })).into_response()
        } else {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Invalid credentials" })),
            )
                .into_response()
        };
    }

    let Some(collection) = COLLECTIONS.iter().find(|c| path.starts_with(**c)) else {
        return admin_routes(&state, &method, &path, bearer.as_deref(), json_body, &body);
    };
    let rest = &path[collection.len()..];

    let anonymous = (method == Method::GET && rest.is_empty() && *collection != "/api/Applications")
        || (method == Method::POST && *collection == "/api/Applications");
    if !anonymous && bearer.as_deref() != Some(ADMIN_TOKEN) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let mut records = state.records.lock().unwrap();
    let items = records.entry(collection.to_string()).or_default();

    match (method.as_str(), rest) {
        ("GET", "") => {
            let visible: Vec<Value> = items
                .iter()
                .filter(|item| !anonymous || item.get("isActive") != Some(&Value::Bool(false)))
                .cloned()
                .collect();
            Json(visible).into_response()
        }
        ("GET", "/admin" | "/all") => Json(items.clone()).into_response(),
        ("POST", "") => {
            let mut record = json_body;
            record["id"] = json!(state.allocate_id());
            items.push(record.clone());
            (StatusCode::CREATED, Json(record)).into_response()
        }
        ("PUT", rest) => {
            let id = rest
                .strip_prefix('/')
                .map(str::to_string)
                .or_else(|| uri.query().and_then(|q| q.strip_prefix("id=")).map(str::to_string))
                .and_then(|id| id.parse::<i64>().ok());
            let Some(id) = id else {
                return (StatusCode::BAD_REQUEST, "missing id").into_response();
            };
            match items.iter_mut().find(|item| item["id"] == json!(id)) {
                Some(existing) => {
                    let mut record = json_body;
                    record["id"] = json!(id);
                    *existing = record;
                    StatusCode::NO_CONTENT.into_response()
                }
                None => not_found("Record"),
            }
        }
        ("DELETE", rest) => {
            let id = rest.trim_start_matches('/').parse::<i64>().ok();
            let before = items.len();
            items.retain(|item| Some(item["id"].as_i64().unwrap_or_default()) != id);
            if items.len() == before {
                not_found("Record")
            } else {
                StatusCode::NO_CONTENT.into_response()
            }
        }
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}

fn admin_routes(
    state: &MockState,
    method: &Method,
    path: &str,
    bearer: Option<&str>,
    json_body: Value,
    raw: &Bytes,
) -> Response {
    if bearer != Some(ADMIN_TOKEN) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    match (method.as_str(), path) {
        ("GET", "/api/Admin/profile") => Json(state.profile.lock().unwrap().clone()).into_response(),
        ("PUT", "/api/Admin/profile") => {
            *state.profile.lock().unwrap() = json_body;
            StatusCode::NO_CONTENT.into_response()
        }
        ("DELETE", "/api/Admin/account") => StatusCode::NO_CONTENT.into_response(),
        ("POST", "/api/Upload") => {
            let text = String::from_utf8_lossy(raw);
            let name = text
                .split("filename=\"")
                .nth(1)
                .and_then(|rest| rest.split('"').next())
                .unwrap_or("upload.bin");
            Json(json!({ "url": format!("/uploads/{name}") })).into_response()
        }
        _ => not_found("Route"),
    }
}
