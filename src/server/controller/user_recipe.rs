use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, recipe::RecipeShortDto},
    server::{
        data::user_recipe::RecipeList,
        error::AppError,
        middleware::auth::AuthGuard,
        service::user_recipe::UserRecipeService,
        state::AppState,
    },
};

/// Tag for grouping favorites and shopping cart endpoints in OpenAPI documentation
pub static USER_RECIPE_TAG: &str = "favorites & shopping cart";

pub const SHOPPING_LIST_FILENAME: &str = "shopping_list.txt";

async fn add_to(
    state: AppState,
    headers: HeaderMap,
    list: RecipeList,
    recipe_id: i32,
) -> Result<(StatusCode, Json<RecipeShortDto>), AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let recipe = UserRecipeService::new(&state.db)
        .add(list, user.id, recipe_id)
        .await?;

    Ok((StatusCode::CREATED, Json(recipe.into_short_dto(&state.media))))
}

async fn remove_from(
    state: AppState,
    headers: HeaderMap,
    list: RecipeList,
    recipe_id: i32,
) -> Result<StatusCode, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    UserRecipeService::new(&state.db)
        .remove(list, user.id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a recipe to the caller's favorites.
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/favorite/",
    tag = USER_RECIPE_TAG,
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 201, description = "Added to favorites", body = RecipeShortDto),
        (status = 400, description = "Already in favorites", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    add_to(state, headers, RecipeList::Favorites, id).await
}

/// Remove a recipe from the caller's favorites.
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/favorite/",
    tag = USER_RECIPE_TAG,
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Removed from favorites"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Recipe not found or not in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    remove_from(state, headers, RecipeList::Favorites, id).await
}

/// Add a recipe to the caller's shopping cart.
#[utoipa::path(
    post,
    path = "/api/recipes/{id}/shopping_cart/",
    tag = USER_RECIPE_TAG,
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 201, description = "Added to the shopping cart", body = RecipeShortDto),
        (status = 400, description = "Already in the shopping cart", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Recipe not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    add_to(state, headers, RecipeList::ShoppingCart, id).await
}

/// Remove a recipe from the caller's shopping cart.
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/shopping_cart/",
    tag = USER_RECIPE_TAG,
    params(
        ("id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Removed from the shopping cart"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Recipe not found or not in the shopping cart", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    remove_from(state, headers, RecipeList::ShoppingCart, id).await
}

/// Download the aggregated ingredient list of the caller's shopping cart.
///
/// Amounts of the same ingredient and unit are summed across all recipes in the
/// cart. The response is a plain text attachment.
#[utoipa::path(
    get,
    path = "/api/recipes/download_shopping_cart/",
    tag = USER_RECIPE_TAG,
    responses(
        (status = 200, description = "Shopping list", content_type = "text/plain", body = String),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_shopping_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require().await?;

    let body = UserRecipeService::new(&state.db)
        .shopping_list(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", SHOPPING_LIST_FILENAME),
            ),
        ],
        body,
    ))
}
