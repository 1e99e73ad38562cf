use super::*;

/// Tests paginating users.
///
/// Verifies that users are ordered by username and split into pages of the
/// requested size while the total counts every user.
///
/// Expected: Ok with two users on page 1 and one on page 2
#[tokio::test]
async fn orders_by_username_and_paginates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["charlie", "alice", "bob"] {
        factory::user::UserFactory::new(db)
            .username(name)
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);
    let (first, total) = repo
        .get_all_paginated(PageRequest::new(Some(1), Some(2)).unwrap())
        .await?;
    let (second, _) = repo
        .get_all_paginated(PageRequest::new(Some(2), Some(2)).unwrap())
        .await?;

    assert_eq!(total, 3);
    let names: Vec<_> = first.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob"]);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].username, "charlie");

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: Ok with no users and the real total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_all_paginated(PageRequest::new(Some(5), Some(10)).unwrap())
        .await?;

    assert!(users.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
