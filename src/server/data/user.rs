//! User data repository for database operations.
//!
//! Provides the `UserRepository` for creating users, looking them up by ID or email,
//! and updating credentials and avatars. Password hashes never leave this module
//! except through `find_credentials_by_email` and `get_password_hash`.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    pagination::PageRequest,
    user::{CreateUserParams, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `params` - Profile fields and the already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Insert failed, including unique constraint violations
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            username: ActiveValue::Set(params.username),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            password: ActiveValue::Set(params.password_hash),
            avatar: ActiveValue::Set(None),
            is_superuser: ActiveValue::Set(params.is_superuser),
            date_joined: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Gets the users with the given IDs; unknown IDs are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user and their password hash by email.
    ///
    /// Used by login; the email comparison is exact.
    ///
    /// # Returns
    /// - `Ok(Some((User, String)))` - User and stored password hash
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| {
            let hash = e.password.clone();
            (User::from_entity(e), hash)
        }))
    }

    /// Gets the stored password hash of a user.
    pub async fn get_password_hash(&self, id: i32) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(|e| e.password))
    }

    /// Checks whether a user with this email already exists.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a user with this username already exists.
    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces the password hash of a user.
    ///
    /// # Returns
    /// - `Ok(())` - Hash updated (or no matching user found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_password_hash(&self, id: i32, hash: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::Password,
                sea_orm::sea_query::Expr::value(hash),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets or clears the avatar path of a user.
    pub async fn set_avatar(&self, id: i32, avatar: Option<String>) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::Avatar,
                sea_orm::sea_query::Expr::value(avatar),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets one page of all users, ordered by username.
    ///
    /// Pages past the end return no users without issuing the page query.
    ///
    /// # Arguments
    /// - `request` - Page number and size
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users on the page and the total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        request: PageRequest,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, request.per_page);

        let total = paginator.num_items().await?;
        if request.index().saturating_mul(request.per_page) >= total {
            return Ok((Vec::new(), total));
        }

        let entities = paginator.fetch_page(request.index()).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }
}
