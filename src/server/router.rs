//! Route table, API documentation and HTTP middleware.

use std::sync::Arc;

use axum::Router;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        ingredient::{self, INGREDIENT_TAG},
        recipe::{self, RECIPE_TAG},
        short_link::{self, SHORT_LINK_TAG},
        subscription::{self, SUBSCRIPTION_TAG},
        user::{self, USER_TAG},
        user_recipe::{self, USER_RECIPE_TAG},
    },
    state::AppState,
};

/// Seconds needed to regain one login attempt.
const LOGIN_REPLENISH_SECS: u64 = 2;
/// Login attempts a single address may make in a burst.
const LOGIN_BURST: u32 = 10;

#[derive(OpenApi)]
#[openapi(
    info(title = "Foodgram API", description = "Recipes, subscriptions, favorites and shopping lists"),
    tags(
        (name = AUTH_TAG, description = "Token authentication"),
        (name = USER_TAG, description = "Users and profiles"),
        (name = SUBSCRIPTION_TAG, description = "Following authors"),
        (name = INGREDIENT_TAG, description = "Ingredient catalogue"),
        (name = RECIPE_TAG, description = "Recipes"),
        (name = USER_RECIPE_TAG, description = "Favorites and the shopping cart"),
        (name = SHORT_LINK_TAG, description = "Recipe short links")
    )
)]
struct ApiDoc;

/// Builds the application router with its state applied.
///
/// Serves the REST API under `/api/`, short links under `/s/`, uploaded files under
/// `/media/` and Swagger UI at `/api/docs/`. The login route is rate limited per
/// client address, which requires serving with `into_make_service_with_connect_info`
/// or a proxy that sets `X-Forwarded-For`.
pub fn router(state: AppState) -> Router {
    let (api, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(login_router())
        .routes(routes!(auth::logout))
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(user::get_me))
        .routes(routes!(user::get_user))
        .routes(routes!(user::set_password))
        .routes(routes!(user::get_avatar, user::set_avatar, user::delete_avatar))
        .routes(routes!(subscription::get_subscriptions))
        .routes(routes!(subscription::subscribe, subscription::unsubscribe))
        .routes(routes!(ingredient::get_ingredients))
        .routes(routes!(ingredient::get_ingredient))
        .routes(routes!(recipe::get_recipes, recipe::create_recipe))
        .routes(routes!(
            recipe::get_recipe,
            recipe::update_recipe,
            recipe::delete_recipe
        ))
        .routes(routes!(recipe::get_link))
        .routes(routes!(user_recipe::download_shopping_cart))
        .routes(routes!(user_recipe::add_favorite, user_recipe::remove_favorite))
        .routes(routes!(user_recipe::add_to_cart, user_recipe::remove_from_cart))
        .routes(routes!(short_link::follow_short_link))
        .split_for_parts();

    let media = ServeDir::new(state.media.root());

    api.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", openapi))
        .nest_service("/media", media)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn login_router() -> OpenApiRouter<AppState> {
    let login = OpenApiRouter::new().routes(routes!(auth::login));

    let config = GovernorConfigBuilder::default()
        .key_extractor(SmartIpKeyExtractor)
        .per_second(LOGIN_REPLENISH_SECS)
        .burst_size(LOGIN_BURST)
        .finish();

    match config {
        Some(config) => login.layer(GovernorLayer::new(Arc::new(config))),
        None => {
            tracing::warn!("Invalid login rate limit configuration, login is not rate limited");
            login
        }
    }
}
