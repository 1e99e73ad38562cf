use super::*;

/// Tests creating a token for a user.
///
/// Verifies that the key is stored and can be looked up by its owner.
///
/// Expected: Ok with the same key returned by `find_key_by_user`
#[tokio::test]
async fn creates_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = TokenRepository::new(db);

    let key = repo.create(user.id, "a".repeat(40)).await?;

    assert_eq!(key, "a".repeat(40));
    assert_eq!(repo.find_key_by_user(user.id).await?, Some(key));

    Ok(())
}

/// Tests creating a second token for the same user.
///
/// Verifies that a user holds at most one token.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn rejects_second_token_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = TokenRepository::new(db);

    repo.create(user.id, "a".repeat(40)).await?;
    let result = repo.create(user.id, "b".repeat(40)).await;

    assert!(result.is_err());

    Ok(())
}
