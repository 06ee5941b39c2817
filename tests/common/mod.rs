#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use job_tracker::{
    auth::JwtKeys,
    rest::router,
    scrape::{FetchError, FetchedPage, PageFetcher, Scraper},
    AppState,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "integration-test-jwt-secret";
pub const TEST_PASSWORD: &str = "pw123";

pub const LINKEDIN_POSTING: &str = r#"
<html>
  <body>
    <section class="top-card-layout">
      <h1 class="top-card-layout__title">Backend Engineer</h1>
      <a class="topcard__org-name-link" href="https://www.linkedin.com/company/initech">Initech</a>
      <span class="topcard__flavor topcard__flavor--bullet">Austin, TX</span>
    </section>
  </body>
</html>
"#;

pub struct StubFetcher {
    status: StatusCode,
    body: String,
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, _url: &str) -> Result<FetchedPage, FetchError> {
        Ok(FetchedPage {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

pub fn test_keys() -> JwtKeys {
    JwtKeys::from_secret(TEST_JWT_SECRET.as_bytes(), chrono::Duration::hours(1))
}

pub struct TestApp {
    app: Router,
}

impl TestApp {
    pub fn new(db: SqlitePool) -> Self {
        Self::with_page(db, StatusCode::OK, LINKEDIN_POSTING)
    }

    /// Every quick-add fetch answers with `status` and `body`.
    pub fn with_page(db: SqlitePool, status: StatusCode, body: &str) -> Self {
        let fetcher = StubFetcher {
            status,
            body: body.to_string(),
        };
        let state = AppState {
            db,
            jwt: test_keys(),
            scraper: Scraper::new(Arc::new(fetcher)),
        };

        Self { app: router(state) }
    }

    pub async fn post_json(
        &self,
        path: &str,
        body: Value,
        bearer: Option<&str>,
    ) -> (StatusCode, Value) {
        self.request_json(Method::POST, path, Some(body), bearer)
            .await
    }

    pub async fn get_json(&self, path: &str, bearer: Option<&str>) -> (StatusCode, Value) {
        self.request_json(Method::GET, path, None, bearer).await
    }

    pub async fn post_raw(
        &self,
        path: &str,
        body: &str,
        bearer: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let req = builder
            .body(Body::from(body.to_string()))
            .expect("failed to build request");

        read_json(self.send(req).await).await
    }

    pub async fn send(&self, req: Request<Body>) -> Response {
        self.app
            .clone()
            .oneshot(req)
            .await
            .expect("request execution failed")
    }

    async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut req_builder = Request::builder().method(method).uri(path);

        if let Some(token) = bearer {
            req_builder = req_builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let body = match body {
            Some(body) => {
                req_builder = req_builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&body).expect("failed to serialize request body"))
            }
            None => Body::empty(),
        };

        let req = req_builder.body(body).expect("failed to build request");
        read_json(self.send(req).await).await
    }

    pub async fn register(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.post_json(
            "/register",
            json!({
                "username": username,
                "password": password,
                "create_time": "2024-06-01T10:00:00Z"
            }),
            None,
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.post_json(
            "/login",
            json!({
                "username": username,
                "password": password
            }),
            None,
        )
        .await
    }

    pub async fn register_and_login(&self, username: &str) -> String {
        let (status, _) = self.register(username, TEST_PASSWORD).await;
        assert_eq!(status, StatusCode::OK);

        let (status, login_json) = self.login(username, TEST_PASSWORD).await;
        assert_eq!(status, StatusCode::OK);

        login_json
            .get("token")
            .and_then(Value::as_str)
            .expect("login response misses token")
            .to_string()
    }

    pub async fn add_application(&self, token: &str, body: Value) -> i64 {
        let (status, add_json) = self
            .post_json("/applications/add", body, Some(token))
            .await;
        assert_eq!(status, StatusCode::OK, "{add_json}");

        add_json
            .get("id")
            .and_then(Value::as_i64)
            .expect("add response misses id")
    }

    pub async fn list_ids(&self, token: &str) -> Vec<i64> {
        let (status, list_json) = self.get_json("/applications", Some(token)).await;
        assert_eq!(status, StatusCode::OK);

        list_json["results"]
            .as_array()
            .expect("results is not an array")
            .iter()
            .map(|row| row["id"].as_i64().expect("row misses id"))
            .collect()
    }
}

pub fn application(job_title: &str, application_date: &str) -> Value {
    json!({
        "job_title": job_title,
        "company_name": "Acme",
        "application_date": application_date,
        "status": "Applied",
        "is_marked": false
    })
}

pub fn error_message(body: &Value) -> Option<&str> {
    body.get("error").and_then(Value::as_str)
}

async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("failed to read response body");

    if bytes.is_empty() {
        return (status, Value::Null);
    }

    let value = serde_json::from_slice(&bytes).expect("response is not valid json");
    (status, value)
}
