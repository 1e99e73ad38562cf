use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, TokenDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        middleware::{auth::AuthGuard, payload::Payload},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Exchange email and password for an API token.
///
/// Returns the caller's existing token, or creates one. The token is sent on later
/// requests as `Authorization: Token <key>`. Rate limited per client address.
///
/// # Returns
/// - `200 OK` - Token key
/// - `400 Bad Request` - Missing fields or wrong credentials
/// - `429 Too Many Requests` - Too many login attempts from this address
#[utoipa::path(
    post,
    path = "/api/auth/token/login/",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Token issued", body = TokenDto),
        (status = 400, description = "Missing fields or wrong credentials", body = ErrorDto),
        (status = 429, description = "Too many login attempts"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Payload(payload): Payload<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let mut errors = ValidationError::new();
    let email = errors.require("email", payload.email);
    let password = errors.require("password", payload.password);
    errors.into_result()?;

    let auth_token = AuthService::new(&state.db)
        .login(
            email.unwrap_or_default().trim(),
            &password.unwrap_or_default(),
        )
        .await?;

    Ok((StatusCode::OK, Json(TokenDto { auth_token })))
}

/// Revoke the caller's API token.
///
/// # Returns
/// - `204 No Content` - Token deleted
/// - `401 Unauthorized` - No valid token
#[utoipa::path(
    post,
    path = "/api/auth/token/logout/",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    AuthService::new(&state.db).logout(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
