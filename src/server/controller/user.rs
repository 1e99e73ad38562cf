use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{
            AvatarDto, CreateUserDto, CreatedUserDto, PaginatedUsersDto, SetAvatarDto,
            SetPasswordDto, UserDto,
        },
    },
    server::{
        controller::{request_target, PageQuery},
        error::{validation::ValidationError, AppError},
        middleware::{auth::AuthGuard, payload::Payload},
        model::user::RegisterUserParams,
        service::user::UserService,
        state::AppState,
        util::image::decode_data_url,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

/// List users.
///
/// Returns users ordered by username. Anonymous callers see `is_subscribed` as
/// false for everyone.
///
/// # Returns
/// - `200 OK` - One page of users with `next` / `previous` links
/// - `401 Unauthorized` - Invalid token
/// - `404 Not Found` - Page out of range
#[utoipa::path(
    get,
    path = "/api/users/",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 6)")
    ),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "Invalid page", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &headers).current().await?;

    let page = UserService::new(&state.db)
        .get_paginated(viewer.map(|u| u.id), query.page_request()?)
        .await?;

    let (next, previous) = page.links(&state.app_url, request_target(&uri));

    Ok((
        StatusCode::OK,
        Json(PaginatedUsersDto {
            count: page.total,
            next,
            previous,
            results: page
                .items
                .into_iter()
                .map(|profile| profile.into_dto(&state.media))
                .collect(),
        }),
    ))
}

/// Register a new user.
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Field errors as `{field: [messages]}`
#[utoipa::path(
    post,
    path = "/api/users/",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User registered", body = CreatedUserDto),
        (status = 400, description = "Invalid registration data"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Payload(payload): Payload<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterUserParams::from_dto(payload)?;

    let user = UserService::new(&state.db).register(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_created_dto())))
}

/// Get a user's profile.
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    get,
    path = "/api/users/{id}/",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &headers).current().await?;

    let profile = UserService::new(&state.db)
        .get_profile(viewer.map(|u| u.id), id)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto(&state.media))))
}

/// Get the caller's own profile.
#[utoipa::path(
    get,
    path = "/api/users/me/",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Own profile", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    Ok((StatusCode::OK, Json(user.into_dto(false, &state.media))))
}

/// Change the caller's password.
///
/// # Returns
/// - `204 No Content` - Password changed
/// - `400 Bad Request` - Wrong current password or weak new password
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/users/set_password/",
    tag = USER_TAG,
    request_body = SetPasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Invalid password data"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload<SetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let mut errors = ValidationError::new();
    let current_password = errors.require("current_password", payload.current_password);
    let new_password = errors.require("new_password", payload.new_password);
    errors.into_result()?;

    UserService::new(&state.db)
        .set_password(
            user.id,
            current_password.unwrap_or_default(),
            new_password.unwrap_or_default(),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the caller's avatar URL.
#[utoipa::path(
    get,
    path = "/api/users/me/avatar/",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Avatar URL, null when unset", body = AvatarDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_avatar(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let avatar = user.avatar.as_deref().map(|path| state.media.url(path));

    Ok((StatusCode::OK, Json(AvatarDto { avatar })))
}

/// Upload a new avatar for the caller.
///
/// The image is sent as a base64 data URL. The previous avatar file is removed.
///
/// # Returns
/// - `200 OK` - URL of the stored avatar
/// - `400 Bad Request` - Missing or malformed image
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    put,
    path = "/api/users/me/avatar/",
    tag = USER_TAG,
    request_body = SetAvatarDto,
    responses(
        (status = 200, description = "Avatar stored", body = AvatarDto),
        (status = 400, description = "Missing or malformed image"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_avatar(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload<SetAvatarDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let mut errors = ValidationError::new();
    let raw = errors.require("avatar", payload.avatar);
    errors.into_result()?;

    let image = decode_data_url(raw.unwrap_or_default().trim())
        .map_err(|message| ValidationError::field("avatar", message))?;

    let path = UserService::new(&state.db)
        .set_avatar(&state.media, &user, image)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AvatarDto {
            avatar: Some(state.media.url(&path)),
        }),
    ))
}

/// Remove the caller's avatar.
#[utoipa::path(
    delete,
    path = "/api/users/me/avatar/",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Avatar removed"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_avatar(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    UserService::new(&state.db)
        .delete_avatar(&state.media, &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
