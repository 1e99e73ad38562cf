//! HTTP-level tests driving the full router with `oneshot`.

mod user;
mod user_recipe;

use std::path::PathBuf;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{media::MediaStorage, router::router, state::AppState};

pub const APP_URL: &str = "http://localhost";
/// Smallest payload accepted as an image: the PNG signature.
pub const PNG_DATA_URL: &str = "data:image/png;base64,iVBORw0KGgo=";

/// Router over a fresh in-memory database with every table created.
pub struct TestApp {
    pub test: TestContext,
    pub router: Router,
    pub media_root: PathBuf,
}

impl TestApp {
    pub async fn new() -> Self {
        let test = TestBuilder::new().with_foodgram_tables().build().await.unwrap();
        let media_root =
            std::env::temp_dir().join(format!("foodgram-http-{}", uuid::Uuid::new_v4()));

        let state = AppState::new(
            test.db.clone().unwrap(),
            MediaStorage::new(&media_root, APP_URL),
            APP_URL.to_string(),
        );

        Self {
            router: router(state),
            test,
            media_root,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    /// Creates a user with a known token and returns `(user_id, token)`.
    pub async fn user_with_token(&self) -> (i32, String) {
        let user = factory::create_user(self.db()).await.unwrap();
        let key = format!("{:0>40}", user.id);
        factory::create_token(self.db(), user.id, key.clone())
            .await
            .unwrap();

        (user.id, key)
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        self.send_raw(method, uri, token, body.map(|body| body.to_string()))
            .await
    }

    /// Sends `body` verbatim as `application/json`, valid JSON or not.
    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<String>,
    ) -> Response {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("x-forwarded-for", "10.0.0.1");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Token {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        Response {
            status,
            headers,
            body: bytes.to_vec(),
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> Response {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Response {
        self.send(Method::DELETE, uri, token, None).await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.media_root);
    }
}

pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Response {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}
