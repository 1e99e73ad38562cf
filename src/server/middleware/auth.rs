//! Token authentication guard.
//!
//! Requests identify their user with `Authorization: Token <key>`. Headers using
//! another scheme are treated as anonymous; a `Token` header that is malformed or
//! names an unknown key is rejected outright, even on endpoints that allow
//! anonymous access.

use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::token::TokenRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

const TOKEN_SCHEME: &str = "token";

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Resolves the caller, if any.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Valid token
    /// - `Ok(None)` - No `Token` authorization header
    /// - `Err(AppError::AuthErr(InvalidToken))` - Malformed header or unknown key
    pub async fn current(&self) -> Result<Option<User>, AppError> {
        let Some(key) = token_key(self.headers)? else {
            return Ok(None);
        };

        let Some(user) = TokenRepository::new(self.db).find_user_by_key(key).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        Ok(Some(user))
    }

    /// Resolves the caller, failing for anonymous requests.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user
    /// - `Err(AppError::AuthErr(NotAuthenticated))` - No credentials
    /// - `Err(AppError::AuthErr(InvalidToken))` - Malformed header or unknown key
    pub async fn require(&self) -> Result<User, AppError> {
        self.current()
            .await?
            .ok_or_else(|| AuthError::NotAuthenticated.into())
    }
}

/// Extracts the key from an `Authorization: Token <key>` header.
fn token_key(headers: &HeaderMap) -> Result<Option<&str>, AuthError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value.to_str().map_err(|_| AuthError::InvalidToken)?;
    let mut parts = value.split_whitespace();

    match parts.next() {
        Some(scheme) if scheme.eq_ignore_ascii_case(TOKEN_SCHEME) => {}
        _ => return Ok(None),
    }

    match (parts.next(), parts.next()) {
        (Some(key), None) => Ok(Some(key)),
        _ => Err(AuthError::InvalidToken),
    }
}
