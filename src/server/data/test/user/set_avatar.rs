use super::*;

/// Tests setting and clearing a user's avatar.
///
/// Expected: avatar path stored, then removed
#[tokio::test]
async fn sets_and_clears_avatar() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.set_avatar(created.id, Some("avatars/a.png".to_string()))
        .await?;
    let user = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(user.avatar.as_deref(), Some("avatars/a.png"));

    repo.set_avatar(created.id, None).await?;
    let user = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(user.avatar, None);

    Ok(())
}

/// Tests changing the password hash.
///
/// Expected: new hash returned by `get_password_hash`
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.set_password_hash(created.id, "new-hash".to_string())
        .await?;

    assert_eq!(
        repo.get_password_hash(created.id).await?.as_deref(),
        Some("new-hash")
    );

    Ok(())
}
