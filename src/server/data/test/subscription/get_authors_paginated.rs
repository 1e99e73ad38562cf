use super::*;

/// Tests listing followed authors.
///
/// Verifies that only authors followed by the user are returned, ordered by
/// username, and that other users' subscriptions do not leak in.
///
/// Expected: Ok with the two followed authors in username order
#[tokio::test]
async fn lists_followed_authors_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::create_user(db).await?;
    let zed = factory::user::UserFactory::new(db)
        .username("zed")
        .build()
        .await?;
    let amy = factory::user::UserFactory::new(db)
        .username("amy")
        .build()
        .await?;
    let stranger = factory::create_user(db).await?;
    factory::create_subscription(db, follower.id, zed.id).await?;
    factory::create_subscription(db, follower.id, amy.id).await?;
    factory::create_subscription(db, stranger.id, follower.id).await?;

    let repo = SubscriptionRepository::new(db);
    let (authors, total) = repo
        .get_authors_paginated(follower.id, PageRequest::new(None, None).unwrap())
        .await?;

    assert_eq!(total, 2);
    let names: Vec<_> = authors.iter().map(|a| a.username.as_str()).collect();
    assert_eq!(names, vec!["amy", "zed"]);

    Ok(())
}
