use axum::http::{Method, StatusCode};
use serde_json::json;
use test_utils::factory;

use super::{TestApp, APP_URL, PNG_DATA_URL};

fn registration(email: &str, username: &str) -> serde_json::Value {
    json!({
        "email": email,
        "username": username,
        "first_name": "Anna",
        "last_name": "Smith",
        "password": "long-enough-pass"
    })
}

/// Tests registering a user and reading the profile back anonymously.
///
/// Expected: 201 without password or avatar fields, then a profile with
/// `is_subscribed` false
#[tokio::test]
async fn registers_and_shows_profile() {
    let app = TestApp::new().await;

    let created = app
        .post("/api/users/", None, registration("anna@example.com", "anna"))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let body = created.json();
    assert_eq!(body["username"], "anna");
    assert!(body.get("password").is_none());
    assert!(body.get("avatar").is_none());

    let id = body["id"].as_i64().unwrap();
    let profile = app.get(&format!("/api/users/{}/", id), None).await;
    assert_eq!(profile.status, StatusCode::OK);
    assert_eq!(profile.json()["is_subscribed"], false);
    assert!(profile.json()["avatar"].is_null());
}

/// Tests registration field errors.
///
/// Verifies the reserved username, duplicate email and weak password rules.
///
/// Expected: 400 with an entry per failing field
#[tokio::test]
async fn registration_reports_field_errors() {
    let app = TestApp::new().await;
    app.post("/api/users/", None, registration("anna@example.com", "anna"))
        .await;

    let reserved = app
        .post("/api/users/", None, registration("me@example.com", "me"))
        .await;
    assert_eq!(reserved.status, StatusCode::BAD_REQUEST);
    assert!(reserved.json().get("username").is_some());

    let duplicate = app
        .post("/api/users/", None, registration("anna@example.com", "anna2"))
        .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);
    assert!(duplicate.json().get("email").is_some());

    let weak = app
        .post(
            "/api/users/",
            None,
            json!({
                "email": "bob@example.com",
                "username": "bob",
                "first_name": "Bob",
                "last_name": "Stone",
                "password": "12345678"
            }),
        )
        .await;
    assert_eq!(weak.status, StatusCode::BAD_REQUEST);
    assert!(weak.json().get("password").is_some());
}

/// Tests the paginated user listing.
///
/// Expected: `count` covers every user, `next` points at page 2 and an
/// out-of-range page is 404
#[tokio::test]
async fn lists_users_with_pagination() {
    let app = TestApp::new().await;
    for _ in 0..3 {
        factory::create_user(app.db()).await.unwrap();
    }

    let page = app.get("/api/users/?limit=2", None).await;
    assert_eq!(page.status, StatusCode::OK);
    let body = page.json();
    assert_eq!(body["count"], 3);
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
    assert_eq!(
        body["next"],
        format!("{}/api/users/?limit=2&page=2", APP_URL)
    );
    assert!(body["previous"].is_null());

    let past_end = app.get("/api/users/?limit=2&page=3", None).await;
    assert_eq!(past_end.status, StatusCode::NOT_FOUND);
}

/// Tests that `/me/` needs a token.
///
/// Expected: 401 anonymously, 200 with the caller's own profile otherwise
#[tokio::test]
async fn me_requires_authentication() {
    let app = TestApp::new().await;
    let (user_id, token) = app.user_with_token().await;

    let anonymous = app.get("/api/users/me/", None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let me = app.get("/api/users/me/", Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.json()["id"], user_id);
}

/// Tests that changing the password checks the current one.
///
/// Expected: 400 with a `current_password` error
#[tokio::test]
async fn set_password_checks_current_password() {
    let app = TestApp::new().await;
    let (_, token) = app.user_with_token().await;

    let response = app
        .post(
            "/api/users/set_password/",
            Some(&token),
            json!({"current_password": "guess", "new_password": "brand-new-pass"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json().get("current_password").is_some());
}

/// Tests uploading, reading and removing an avatar.
///
/// Expected: PUT returns a media URL, GET returns the same URL, DELETE clears it
#[tokio::test]
async fn avatar_lifecycle() {
    let app = TestApp::new().await;
    let (_, token) = app.user_with_token().await;

    let put = app
        .send(
            Method::PUT,
            "/api/users/me/avatar/",
            Some(&token),
            Some(json!({"avatar": PNG_DATA_URL})),
        )
        .await;
    assert_eq!(put.status, StatusCode::OK);
    let url = put.json()["avatar"].as_str().unwrap().to_string();
    assert!(url.starts_with(&format!("{}/media/avatars/", APP_URL)));
    assert!(url.ends_with(".png"));

    let get = app.get("/api/users/me/avatar/", Some(&token)).await;
    assert_eq!(get.json()["avatar"], url);

    let delete = app.delete("/api/users/me/avatar/", Some(&token)).await;
    assert_eq!(delete.status, StatusCode::NO_CONTENT);

    let get = app.get("/api/users/me/avatar/", Some(&token)).await;
    assert!(get.json()["avatar"].is_null());
}

/// Tests avatar uploads that are missing or not a data URL.
///
/// Expected: 400 with an `avatar` error in both cases
#[tokio::test]
async fn avatar_requires_valid_image() {
    let app = TestApp::new().await;
    let (_, token) = app.user_with_token().await;

    for body in [json!({}), json!({"avatar": "not-an-image"})] {
        let response = app
            .send(
                Method::PUT,
                "/api/users/me/avatar/",
                Some(&token),
                Some(body),
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert!(response.json().get("avatar").is_some());
    }
}

/// Tests registration with a field of the wrong JSON type.
///
/// Expected: 400 keyed by that field instead of a deserialization failure
#[tokio::test]
async fn registration_rejects_wrong_types() {
    let app = TestApp::new().await;

    let mut payload = registration("anna@example.com", "anna");
    payload["email"] = json!(5);

    let response = app.post("/api/users/", None, payload).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json().get("email").is_some());
}
