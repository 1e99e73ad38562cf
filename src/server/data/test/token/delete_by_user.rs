use super::*;

/// Tests deleting a user's token on logout.
///
/// Verifies that the first delete removes the token and a repeated delete
/// reports that nothing was removed.
///
/// Expected: Ok(true), then Ok(false)
#[tokio::test]
async fn deletes_token_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_token(db, user.id, "logout-key").await?;

    let repo = TokenRepository::new(db);

    assert!(repo.delete_by_user(user.id).await?);
    assert!(!repo.delete_by_user(user.id).await?);
    assert!(repo.find_user_by_key("logout-key").await?.is_none());

    Ok(())
}
