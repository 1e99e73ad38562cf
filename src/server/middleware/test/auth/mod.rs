use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
};
use axum::http::{header, HeaderMap, HeaderValue};
use test_utils::{builder::TestBuilder, factory};

mod current;
mod require;

fn token_headers(key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Token {}", key)).unwrap(),
    );
    headers
}
