//! Auth token repository.
//!
//! Each user has at most one token. Tokens are looked up on every authenticated
//! request through `find_user_by_key`.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::user::User;

pub struct TokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a token key to its owner.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Token exists
    /// - `Ok(None)` - Unknown key
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_user_by_key(&self, key: &str) -> Result<Option<User>, DbErr> {
        let result = entity::prelude::AuthToken::find_by_id(key.to_string())
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(_, user)| user).map(User::from_entity))
    }

    /// Gets the key of a user's existing token.
    pub async fn find_key_by_user(&self, user_id: i32) -> Result<Option<String>, DbErr> {
        let token = entity::prelude::AuthToken::find()
            .filter(entity::auth_token::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(token.map(|t| t.key))
    }

    /// Stores a new token for a user.
    ///
    /// # Returns
    /// - `Ok(String)` - The stored key
    /// - `Err(DbErr)` - Insert failed, e.g. the user already has a token
    pub async fn create(&self, user_id: i32, key: String) -> Result<String, DbErr> {
        let token = entity::auth_token::ActiveModel {
            key: ActiveValue::Set(key),
            user_id: ActiveValue::Set(user_id),
            created: ActiveValue::Set(chrono::Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(token.key)
    }

    /// Deletes the token of a user.
    ///
    /// # Returns
    /// - `Ok(true)` - A token was deleted
    /// - `Ok(false)` - The user had no token
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_user(&self, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::AuthToken::delete_many()
            .filter(entity::auth_token::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
