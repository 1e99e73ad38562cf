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
        recipe::{PaginatedRecipesDto, RecipeDto, RecipeWriteDto, ShortLinkDto},
    },
    server::{
        controller::request_target,
        error::{validation::ValidationError, AppError},
        middleware::{auth::AuthGuard, payload::Payload},
        model::{
            pagination::PageRequest,
            recipe::{RecipeFilter, RecipeInput, WriteMode},
        },
        service::recipe::{ensure_author, RecipeService},
        state::AppState,
    },
};

/// Tag for grouping recipe endpoints in OpenAPI documentation
pub static RECIPE_TAG: &str = "recipes";

#[derive(Deserialize, Default)]
pub struct RecipeQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub author: Option<String>,
    pub is_favorited: Option<String>,
    pub is_in_shopping_cart: Option<String>,
}

impl RecipeQuery {
    /// Builds the listing filter for `viewer`.
    ///
    /// List flags only apply to authenticated callers and accept `1` or `true`.
    fn filter(&self, viewer: Option<i32>) -> Result<RecipeFilter, ValidationError> {
        let author_id = match self.author.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<i32>()
                    .map_err(|_| ValidationError::field("author", "A valid integer is required."))?,
            ),
        };

        Ok(RecipeFilter {
            author_id,
            favorited_by: viewer.filter(|_| is_set(self.is_favorited.as_deref())),
            in_cart_of: viewer.filter(|_| is_set(self.is_in_shopping_cart.as_deref())),
        })
    }
}

fn is_set(flag: Option<&str>) -> bool {
    matches!(
        flag.map(|value| value.trim().to_ascii_lowercase()).as_deref(),
        Some("1") | Some("true")
    )
}

/// List recipes, newest first.
///
/// # Returns
/// - `200 OK` - One page of recipes
/// - `400 Bad Request` - Malformed `author` filter
/// - `401 Unauthorized` - Invalid token
/// - `404 Not Found` - Page out of range
#[utoipa::path(
    get,
    path = "/api/recipes/",
    tag = RECIPE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number, starting at 1"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 6)"),
        ("author" = Option<i32>, Query, description = "Only recipes by this author"),
        ("is_favorited" = Option<u8>, Query, description = "1 to list only the caller's favorites"),
        ("is_in_shopping_cart" = Option<u8>, Query, description = "1 to list only the caller's shopping cart")
    ),
    responses(
        (status = 200, description = "Page of recipes", body = PaginatedRecipesDto),
        (status = 400, description = "Invalid filter"),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "Invalid page", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipes(
    State(state): State<AppState>,
    headers: HeaderMap,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<RecipeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &headers)
        .current()
        .await?
        .map(|user| user.id);

    let filter = query.filter(viewer)?;
    let request = PageRequest::from_query(query.page.as_deref(), query.limit.as_deref())?;

    let page = RecipeService::new(&state.db, &state.media)
        .get_paginated(viewer, filter, request)
        .await?;

    let (next, previous) = page.links(&state.app_url, request_target(&uri));

    Ok((
        StatusCode::OK,
        Json(PaginatedRecipesDto {
            count: page.total,
            next,
            previous,
            results: page
                .items
                .into_iter()
                .map(|recipe| recipe.into_dto(&state.media))
                .collect(),
        }),
    ))
}

/// Publish a recipe.
///
/// The recipe and its ingredient amounts are stored atomically.
///
/// # Returns
/// - `201 Created` - The full recipe
/// - `400 Bad Request` - Field errors
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/recipes/",
    tag = RECIPE_TAG,
    request_body = RecipeWriteDto,
    responses(
        (status = 201, description = "Recipe created", body = RecipeDto),
        (status = 400, description = "Invalid recipe data"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload<RecipeWriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let input = RecipeInput::from_dto(payload, WriteMode::Create)?;

    let recipe = RecipeService::new(&state.db, &state.media)
        .create(user.id, input)
        .await?;

    Ok((StatusCode::CREATED, Json(recipe.into_dto(&state.media))))
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}/",
    tag = RECIPE_TAG,
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe", body = RecipeDto),
        (status = 401, description = "Invalid token", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &headers)
        .current()
        .await?
        .map(|user| user.id);

    let recipe = RecipeService::new(&state.db, &state.media)
        .get(viewer, id)
        .await?;

    Ok((StatusCode::OK, Json(recipe.into_dto(&state.media))))
}

/// Edit a recipe.
///
/// `ingredients` is required and replaces the previous set; other fields keep
/// their value when omitted.
///
/// # Returns
/// - `200 OK` - The updated recipe
/// - `400 Bad Request` - Field errors
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Caller is not the author
/// - `404 Not Found` - No recipe with that ID
#[utoipa::path(
    patch,
    path = "/api/recipes/{id}/",
    tag = RECIPE_TAG,
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    request_body = RecipeWriteDto,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeDto),
        (status = 400, description = "Invalid recipe data"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the author", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Payload(payload): Payload<RecipeWriteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let service = RecipeService::new(&state.db, &state.media);
    // Missing recipes and foreign authors are reported before field validation.
    let existing = service.get(Some(user.id), id).await?;
    ensure_author(user.id, &existing.recipe, "update")?;

    let input = RecipeInput::from_dto(payload, WriteMode::Update)?;
    let recipe = service.update(user.id, id, input).await?;

    Ok((StatusCode::OK, Json(recipe.into_dto(&state.media))))
}

/// Delete a recipe and its image.
///
/// # Returns
/// - `204 No Content` - Recipe deleted
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Caller is not the author
/// - `404 Not Found` - No recipe with that ID
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/",
    tag = RECIPE_TAG,
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the author", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    RecipeService::new(&state.db, &state.media)
        .delete(user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the short link of a recipe.
#[utoipa::path(
    get,
    path = "/api/recipes/{id}/get-link/",
    tag = RECIPE_TAG,
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Short link", body = ShortLinkDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_link(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let code = RecipeService::new(&state.db, &state.media)
        .short_link(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ShortLinkDto {
            short_link: format!("{}/s/{}", state.app_url, code),
        }),
    ))
}
