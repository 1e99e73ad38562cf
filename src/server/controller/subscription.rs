use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        user::{PaginatedSubscriptionsDto, SubscribedUserDto},
    },
    server::{
        controller::{parse_recipes_limit, request_target},
        error::AppError,
        middleware::auth::AuthGuard,
        model::pagination::PageRequest,
        service::subscription::SubscriptionService,
        state::AppState,
    },
};

/// Tag for grouping subscription endpoints in OpenAPI documentation
pub static SUBSCRIPTION_TAG: &str = "subscriptions";

#[derive(Deserialize, Default)]
pub struct SubscriptionsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub recipes_limit: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct RecipesLimitQuery {
    pub recipes_limit: Option<String>,
}

/// List the authors the caller follows.
///
/// Each author carries their newest recipes, truncated to `recipes_limit` when it
/// is a non-negative integer, and their total recipe count.
///
/// # Returns
/// - `200 OK` - One page of followed authors
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Page out of range
#[utoipa::path(
    get,
    path = "/api/users/subscriptions/",
    tag = SUBSCRIPTION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 6)"),
        ("recipes_limit" = Option<u64>, Query, description = "Maximum recipes listed per author")
    ),
    responses(
        (status = 200, description = "Page of followed authors", body = PaginatedSubscriptionsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Invalid page", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscriptions(
    State(state): State<AppState>,
    headers: HeaderMap,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<SubscriptionsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let request = PageRequest::from_query(query.page.as_deref(), query.limit.as_deref())?;
    let recipes_limit = parse_recipes_limit(query.recipes_limit.as_deref());

    let page = SubscriptionService::new(&state.db)
        .get_paginated(user.id, request, recipes_limit)
        .await?;

    let (next, previous) = page.links(&state.app_url, request_target(&uri));

    Ok((
        StatusCode::OK,
        Json(PaginatedSubscriptionsDto {
            count: page.total,
            next,
            previous,
            results: page
                .items
                .into_iter()
                .map(|author| author.into_dto(&state.media))
                .collect(),
        }),
    ))
}

/// Follow an author.
///
/// # Returns
/// - `201 Created` - The author with their recipes
/// - `400 Bad Request` - Following yourself or already following
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    post,
    path = "/api/users/{id}/subscribe/",
    tag = SUBSCRIPTION_TAG,
    params(
        ("id" = i32, Path, description = "Author user ID"),
        ("recipes_limit" = Option<u64>, Query, description = "Maximum recipes listed")
    ),
    responses(
        (status = 201, description = "Subscribed", body = SubscribedUserDto),
        (status = 400, description = "Self or duplicate subscription", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(author_id): Path<i32>,
    Query(query): Query<RecipesLimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let author = SubscriptionService::new(&state.db)
        .subscribe(
            user.id,
            author_id,
            parse_recipes_limit(query.recipes_limit.as_deref()),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(author.into_dto(&state.media))))
}

/// Stop following an author.
///
/// # Returns
/// - `204 No Content` - Unsubscribed
/// - `400 Bad Request` - Not following this author
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    delete,
    path = "/api/users/{id}/subscribe/",
    tag = SUBSCRIPTION_TAG,
    params(
        ("id" = i32, Path, description = "Author user ID")
    ),
    responses(
        (status = 204, description = "Unsubscribed"),
        (status = 400, description = "Not subscribed", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(author_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    SubscriptionService::new(&state.db)
        .unsubscribe(user.id, author_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
