use super::*;

/// Tests checking subscriptions for a batch of authors.
///
/// Verifies that only followed authors from the given list are returned.
///
/// Expected: set containing only the followed author
#[tokio::test]
async fn returns_only_followed_authors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::create_user(db).await?;
    let followed = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let outside = factory::create_user(db).await?;
    factory::create_subscription(db, follower.id, followed.id).await?;
    factory::create_subscription(db, follower.id, outside.id).await?;

    let repo = SubscriptionRepository::new(db);
    let result = repo
        .followed_among(follower.id, &[followed.id, other.id])
        .await?;

    assert_eq!(result.len(), 1);
    assert!(result.contains(&followed.id));
    assert!(repo.followed_among(follower.id, &[]).await?.is_empty());

    Ok(())
}
