use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The endpoint requires a user but the request carried no token.
    ///
    /// Results in 401 Unauthorized.
    #[error("Authentication credentials were not provided.")]
    NotAuthenticated,

    /// The `Authorization: Token` header was malformed or named an unknown key.
    ///
    /// Results in 401 Unauthorized, even on endpoints that allow anonymous access.
    #[error("Invalid token.")]
    InvalidToken,

    /// Login with an unknown email or a wrong password.
    ///
    /// Results in 400 Bad Request; the message does not reveal which part was wrong.
    #[error("Unable to log in with provided credentials.")]
    InvalidCredentials,

    /// Authenticated user attempted to modify a resource they do not own.
    ///
    /// Results in 403 Forbidden. The first field is the user ID, the second a
    /// server-side description of the attempt.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// 401 responses carry `WWW-Authenticate: Token` so clients know which scheme to use.
/// Access denials are logged at debug level with their reason while the client gets
/// a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated | Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Token")],
                Json(ErrorDto {
                    detail: self.to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    detail: self.to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        detail: "You do not have permission to perform this action.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
