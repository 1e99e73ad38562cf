use super::*;

/// Tests following and unfollowing an author.
///
/// Verifies that `exists` reflects the subscription and that `delete`
/// reports whether a row was removed.
///
/// Expected: exists after create, gone after delete
#[tokio::test]
async fn creates_and_deletes_subscription() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::create_user(db).await?;
    let author = factory::create_user(db).await?;

    let repo = SubscriptionRepository::new(db);
    repo.create(follower.id, author.id).await?;

    assert!(repo.exists(follower.id, author.id).await?);
    assert!(!repo.exists(author.id, follower.id).await?);

    assert!(repo.delete(follower.id, author.id).await?);
    assert!(!repo.delete(follower.id, author.id).await?);
    assert!(!repo.exists(follower.id, author.id).await?);

    Ok(())
}
