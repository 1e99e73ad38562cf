use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::api::ErrorDto,
    server::{error::AppError, service::recipe::RecipeService, state::AppState},
};

/// Tag for grouping short link endpoints in OpenAPI documentation
pub static SHORT_LINK_TAG: &str = "short links";

/// Follow a recipe short link.
///
/// # Returns
/// - `302 Found` - Redirect to the recipe
/// - `404 Not Found` - Unknown code
#[utoipa::path(
    get,
    path = "/s/{code}",
    tag = SHORT_LINK_TAG,
    params(
        ("code" = String, Path, description = "Short link code")
    ),
    responses(
        (status = 302, description = "Redirect to the recipe"),
        (status = 404, description = "Unknown short link", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn follow_short_link(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = RecipeService::new(&state.db, &state.media)
        .resolve_short_link(&code)
        .await?;

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, format!("/api/recipes/{}/", id))],
    ))
}
