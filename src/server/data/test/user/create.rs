use super::*;

fn params(email: &str, username: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        username: username.to_string(),
        first_name: "Ivan".to_string(),
        last_name: "Petrov".to_string(),
        password_hash: "pbkdf2_sha256$1000$salt$hash".to_string(),
        is_superuser: false,
    }
}

/// Tests creating a new user.
///
/// Verifies that the repository stores the profile fields and returns the
/// created user with a generated ID and no avatar.
///
/// Expected: Ok with user matching the parameters
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("ivan@example.com", "ivan")).await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "ivan@example.com");
    assert_eq!(user.username, "ivan");
    assert_eq!(user.avatar, None);
    assert!(!user.is_superuser);
    assert!(repo.email_exists("ivan@example.com").await?);
    assert!(repo.username_exists("ivan").await?);

    Ok(())
}

/// Tests creating a user with a taken email.
///
/// Verifies that the unique constraint on email rejects a second user with
/// the same address.
///
/// Expected: Err
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("same@example.com", "first")).await?;
    let result = repo.create(params("same@example.com", "second")).await;

    assert!(result.is_err());

    Ok(())
}
