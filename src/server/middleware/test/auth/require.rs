use super::*;

/// Tests requiring a user on an anonymous request.
///
/// Expected: Err(AuthError::NotAuthenticated)
#[tokio::test]
async fn fails_without_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotAuthenticated))
    ));

    Ok(())
}

/// Tests requiring a user after logout deleted the token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn fails_after_token_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_token(db, user.id, "old-key").await?;
    crate::server::data::token::TokenRepository::new(db)
        .delete_by_user(user.id)
        .await?;

    let headers = token_headers("old-key");
    let result = AuthGuard::new(db, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests requiring a user with a valid token.
///
/// Expected: Ok(user)
#[tokio::test]
async fn returns_authenticated_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_token(db, user.id, "good-key").await?;

    let headers = token_headers("good-key");
    let required = AuthGuard::new(db, &headers).require().await?;

    assert_eq!(required.username, user.username);

    Ok(())
}
