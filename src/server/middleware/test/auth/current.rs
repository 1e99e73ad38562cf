use super::*;

/// Tests resolving the caller from a valid token.
///
/// Expected: Ok(Some(user)) for the token's owner
#[tokio::test]
async fn resolves_token_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_token(db, user.id, "valid-key").await?;

    let headers = token_headers("valid-key");
    let current = AuthGuard::new(db, &headers).current().await?;

    assert_eq!(current.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests an anonymous request.
///
/// Expected: Ok(None)
#[tokio::test]
async fn anonymous_without_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let current = AuthGuard::new(db, &headers).current().await?;

    assert!(current.is_none());

    Ok(())
}

/// Tests a token that does not belong to any user.
///
/// Verifies that an unknown key fails even though anonymous access would be
/// allowed.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = token_headers("unknown-key");
    let result = AuthGuard::new(db, &headers).current().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}
