//! Token authentication service.
//!
//! Exchanges email and password for the user's API token and revokes it on
//! logout. Each user has at most one token; logging in again returns the same key
//! until the user logs out.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{token::TokenRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::User,
    util::{password::verify_password, random::token_key},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks credentials and returns the user's token key.
    ///
    /// Password verification runs on the blocking thread pool since the hash is
    /// deliberately slow.
    ///
    /// # Arguments
    /// - `email` - Login email, matched exactly
    /// - `password` - Plaintext password
    ///
    /// # Returns
    /// - `Ok(String)` - Existing or newly created token key
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError)` - Database or task failure
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some((user, hash)) = user_repo.find_credentials_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let password = password.to_string();
        let valid = tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await?;
        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        let key = self.issue_token(&user).await?;

        tracing::debug!("User {} logged in", user.id);

        Ok(key)
    }

    /// Deletes the user's token. Logging out twice is not an error.
    pub async fn logout(&self, user_id: i32) -> Result<(), AppError> {
        TokenRepository::new(self.db).delete_by_user(user_id).await?;

        Ok(())
    }

    async fn issue_token(&self, user: &User) -> Result<String, AppError> {
        let token_repo = TokenRepository::new(self.db);

        if let Some(key) = token_repo.find_key_by_user(user.id).await? {
            return Ok(key);
        }

        match token_repo.create(user.id, token_key()).await {
            Ok(key) => Ok(key),
            // A concurrent login for the same user created the token first.
            Err(err) => match token_repo.find_key_by_user(user.id).await? {
                Some(key) => Ok(key),
                None => Err(err.into()),
            },
        }
    }
}
