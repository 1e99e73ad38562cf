use super::*;

/// Tests resolving a token key to its owner.
///
/// Expected: Ok(Some(user)) for a known key, Ok(None) otherwise
#[tokio::test]
async fn resolves_owner_of_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_token(db, user.id, "known-key").await?;

    let repo = TokenRepository::new(db);

    let found = repo.find_user_by_key("known-key").await?.unwrap();
    assert_eq!(found.id, user.id);
    assert!(repo.find_user_by_key("other-key").await?.is_none());

    Ok(())
}
