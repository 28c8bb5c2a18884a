use std::sync::Once;

use axum::{Router, body::Body};
use http::{HeaderMap, Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use report_desk_axum::{AppState, report_desk_router_no_trace};

/// Authority every test admin belongs to
pub const TEST_AUTHORITY_ID: &str = "5ddf784f9dbb9f1530b96033";
pub const TEST_AUTHORITY_NAME: &str = "testauthority";

/// A second authority that no test admin belongs to
pub const OTHER_AUTHORITY_ID: &str = "5ddf784f9dbb9f1530b96099";

const TEST_DEFAULTS: &[(&str, &str)] = &[
    ("GENERIC_DATA_STORE_TYPE", "sqlite"),
    (
        "GENERIC_DATA_STORE_URL",
        "sqlite:file:report_desk_axum_test?mode=memory&cache=shared",
    ),
    ("GENERIC_CACHE_STORE_TYPE", "memory"),
    ("GENERIC_CACHE_STORE_URL", "memory"),
];

/// Load `.env_test` before any store LazyLock is touched
fn load_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if let Err(e) = dotenvy::from_filename(".env_test") {
            println!("Warning: Could not load .env_test file: {e}");
        }
        for (key, value) in TEST_DEFAULTS {
            if std::env::var(key).is_err() {
                // Set before any other thread reads the environment
                unsafe { std::env::set_var(key, value) };
            }
        }
    });
}

/// The router wired to the real identity provider and SQL repository
pub struct TestApp {
    router: Router,
}

/// Status, headers and parsed JSON body of a response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// The `name=value` pair of the first `Set-Cookie` header
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|pair| pair.trim().to_string())
    }

    pub fn error_message(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}

impl TestApp {
    pub async fn start() -> Self {
        load_test_environment();

        report_desk_axum::init()
            .await
            .expect("Failed to initialize report-desk");
        report_desk_axum::seed_authorities(&format!(
            "{TEST_AUTHORITY_ID}:{TEST_AUTHORITY_NAME},{OTHER_AUTHORITY_ID}:otherauthority"
        ))
        .await
        .expect("Failed to seed test authority");

        Self {
            router: report_desk_router_no_trace(AppState::default()),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router should not fail");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Send a request with an optional session cookie and JSON body
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.send(builder.body(body).expect("Failed to build request"))
            .await
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.request(Method::GET, uri, cookie, None).await
    }

    pub async fn post(&self, uri: &str, cookie: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::POST, uri, cookie, Some(body)).await
    }

    pub async fn put(&self, uri: &str, cookie: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, cookie, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.request(Method::DELETE, uri, cookie, None).await
    }
}
