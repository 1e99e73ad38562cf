use axum::http::{header, StatusCode};
use serde_json::json;
use test_utils::factory::{self, ingredient::IngredientFactory};

use super::TestApp;
use crate::server::{controller::user_recipe::SHOPPING_LIST_FILENAME, model::recipe::SHOPPING_LIST_HEADER};

/// Tests adding and removing a favorite.
///
/// Expected: 201 with the short form, 400 on repeat, 204 on removal and 404 once
/// the recipe is no longer a favorite
#[tokio::test]
async fn favorite_lifecycle() {
    let app = TestApp::new().await;
    let (_, token) = app.user_with_token().await;
    let author = factory::create_user(app.db()).await.unwrap();
    let recipe = factory::create_recipe(app.db(), author.id).await.unwrap();
    let uri = format!("/api/recipes/{}/favorite/", recipe.id);

    let added = app.post(&uri, Some(&token), json!({})).await;
    assert_eq!(added.status, StatusCode::CREATED);
    let body = added.json();
    assert_eq!(body["id"], recipe.id);
    assert_eq!(body["name"], recipe.name);
    assert!(body.get("author").is_none());

    let repeated = app.post(&uri, Some(&token), json!({})).await;
    assert_eq!(repeated.status, StatusCode::BAD_REQUEST);

    let detail = app
        .get(&format!("/api/recipes/{}/", recipe.id), Some(&token))
        .await;
    assert_eq!(detail.json()["is_favorited"], true);

    let removed = app.delete(&uri, Some(&token)).await;
    assert_eq!(removed.status, StatusCode::NO_CONTENT);

    let again = app.delete(&uri, Some(&token)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

/// Tests cart operations on a recipe that does not exist.
///
/// Expected: 404 for both add and remove
#[tokio::test]
async fn cart_rejects_missing_recipe() {
    let app = TestApp::new().await;
    let (_, token) = app.user_with_token().await;

    let added = app
        .post("/api/recipes/9999/shopping_cart/", Some(&token), json!({}))
        .await;
    assert_eq!(added.status, StatusCode::NOT_FOUND);

    let removed = app
        .delete("/api/recipes/9999/shopping_cart/", Some(&token))
        .await;
    assert_eq!(removed.status, StatusCode::NOT_FOUND);
}

/// Tests the shopping list download.
///
/// Verifies that amounts of the same ingredient are summed across recipes in the
/// cart and that the response is a text attachment.
///
/// Expected: header, blank line, then one line per ingredient ordered by name
#[tokio::test]
async fn downloads_aggregated_shopping_list() {
    let app = TestApp::new().await;
    let (_, token) = app.user_with_token().await;
    let author = factory::create_user(app.db()).await.unwrap();
    let sugar = IngredientFactory::new(app.db())
        .name("sugar")
        .measurement_unit("g")
        .build()
        .await
        .unwrap();
    let eggs = IngredientFactory::new(app.db())
        .name("eggs")
        .measurement_unit("pcs")
        .build()
        .await
        .unwrap();

    let cake = factory::create_recipe(app.db(), author.id).await.unwrap();
    factory::add_recipe_ingredient(app.db(), cake.id, sugar.id, 200)
        .await
        .unwrap();
    factory::add_recipe_ingredient(app.db(), cake.id, eggs.id, 3)
        .await
        .unwrap();
    let cookies = factory::create_recipe(app.db(), author.id).await.unwrap();
    factory::add_recipe_ingredient(app.db(), cookies.id, sugar.id, 50)
        .await
        .unwrap();

    for recipe in [cake.id, cookies.id] {
        let added = app
            .post(
                &format!("/api/recipes/{}/shopping_cart/", recipe),
                Some(&token),
                json!({}),
            )
            .await;
        assert_eq!(added.status, StatusCode::CREATED);
    }

    let response = app
        .get("/api/recipes/download_shopping_cart/", Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert!(response.headers[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .contains(SHOPPING_LIST_FILENAME));
    assert_eq!(
        response.text(),
        format!("{}\n\neggs - 3 pcs\nsugar - 250 g\n", SHOPPING_LIST_HEADER)
    );
}

/// Tests that the download requires a token.
///
/// Expected: 401 anonymously
#[tokio::test]
async fn download_requires_authentication() {
    let app = TestApp::new().await;

    let response = app.get("/api/recipes/download_shopping_cart/", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
