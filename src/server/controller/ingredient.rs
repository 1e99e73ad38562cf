use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, ingredient::IngredientDto},
    server::{error::AppError, service::ingredient::IngredientService, state::AppState},
};

/// Tag for grouping ingredient endpoints in OpenAPI documentation
pub static INGREDIENT_TAG: &str = "ingredients";

#[derive(Deserialize, Default)]
pub struct IngredientQuery {
    pub name: Option<String>,
}

/// List ingredients, optionally filtered by a case-insensitive name prefix.
#[utoipa::path(
    get,
    path = "/api/ingredients/",
    tag = INGREDIENT_TAG,
    params(
        ("name" = Option<String>, Query, description = "Name prefix")
    ),
    responses(
        (status = 200, description = "Ingredients ordered by name", body = Vec<IngredientDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ingredients(
    State(state): State<AppState>,
    Query(query): Query<IngredientQuery>,
) -> Result<impl IntoResponse, AppError> {
    let ingredients = IngredientService::new(&state.db)
        .search(query.name.as_deref())
        .await?;

    let dtos: Vec<IngredientDto> = ingredients.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/ingredients/{id}/",
    tag = INGREDIENT_TAG,
    params(
        ("id" = i32, Path, description = "Ingredient ID")
    ),
    responses(
        (status = 200, description = "Ingredient", body = IngredientDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ingredient(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let ingredient = IngredientService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(ingredient.into_dto())))
}
