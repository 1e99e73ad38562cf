//! User service for business logic.
//!
//! This module provides the `UserService` for registration, profile lookups,
//! password changes and avatars. Profiles are always resolved relative to a
//! viewer so `is_subscribed` reflects the caller.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{subscription::SubscriptionRepository, user::UserRepository},
    error::{validation::ValidationError, AppError},
    media::{MediaStorage, AVATAR_IMAGES},
    model::{
        pagination::{Page, PageRequest},
        user::{password_problems, CreateUserParams, RegisterUserParams, User, UserProfile},
    },
    util::{
        image::DecodedImage,
        password::{hash_password, verify_password},
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// # Arguments
    /// - `params` - Validated registration fields with the plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::ValidationErr)` - Email or username already taken
    /// - `Err(AppError)` - Database or task failure
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        self.create(params, false).await
    }

    /// Registers a user with administrator rights, used by `create-superuser`.
    pub async fn create_superuser(&self, params: RegisterUserParams) -> Result<User, AppError> {
        self.create(params, true).await
    }

    async fn create(&self, params: RegisterUserParams, is_superuser: bool) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let mut errors = ValidationError::new();
        if repo.email_exists(&params.email).await? {
            errors.add("email", "A user with that email already exists.");
        }
        if repo.username_exists(&params.username).await? {
            errors.add("username", "A user with that username already exists.");
        }
        errors.into_result()?;

        let password = params.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password)).await?;

        let user = repo
            .create(CreateUserParams {
                email: params.email,
                username: params.username,
                first_name: params.first_name,
                last_name: params.last_name,
                password_hash,
                is_superuser,
            })
            .await?;

        tracing::info!(
            "Registered {} {} ({})",
            if is_superuser { "superuser" } else { "user" },
            user.id,
            user.username
        );

        Ok(user)
    }

    /// Gets one page of users as seen by `viewer`.
    ///
    /// # Returns
    /// - `Ok(Page<UserProfile>)` - Users ordered by username
    /// - `Err(AppError::NotFound)` - Page past the end
    pub async fn get_paginated(
        &self,
        viewer: Option<i32>,
        request: PageRequest,
    ) -> Result<Page<UserProfile>, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(request)
            .await?;
        request.ensure_in_range(total)?;

        let profiles = self.profiles(viewer, users).await?;

        Ok(Page::new(profiles, total, request))
    }

    /// Gets a single user as seen by `viewer`.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - User found
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get_profile(&self, viewer: Option<i32>, id: i32) -> Result<UserProfile, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        let is_subscribed = match viewer {
            Some(viewer) => {
                SubscriptionRepository::new(self.db)
                    .exists(viewer, user.id)
                    .await?
            }
            None => false,
        };

        Ok(UserProfile {
            user,
            is_subscribed,
        })
    }

    /// Pairs users with whether `viewer` follows each of them.
    ///
    /// Anonymous viewers follow nobody. One query covers the whole list.
    pub async fn profiles(
        &self,
        viewer: Option<i32>,
        users: Vec<User>,
    ) -> Result<Vec<UserProfile>, AppError> {
        let followed = match viewer {
            Some(viewer) => {
                let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
                SubscriptionRepository::new(self.db)
                    .followed_among(viewer, &ids)
                    .await?
            }
            None => Default::default(),
        };

        Ok(users
            .into_iter()
            .map(|user| UserProfile {
                is_subscribed: followed.contains(&user.id),
                user,
            })
            .collect())
    }

    /// Changes a user's password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::ValidationErr)` - Wrong current password or weak new password
    pub async fn set_password(
        &self,
        user_id: i32,
        current_password: String,
        new_password: String,
    ) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        let mut errors = ValidationError::new();
        for message in password_problems(&new_password) {
            errors.add("new_password", message);
        }
        errors.into_result()?;

        let stored = repo
            .get_password_hash(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        let new_hash = tokio::task::spawn_blocking(move || {
            verify_password(&current_password, &stored).then(|| hash_password(&new_password))
        })
        .await?;

        let Some(new_hash) = new_hash else {
            return Err(ValidationError::field("current_password", "Wrong password.").into());
        };

        repo.set_password_hash(user_id, new_hash).await?;

        tracing::info!("User {} changed their password", user_id);

        Ok(())
    }

    /// Stores a new avatar and removes the previous file.
    ///
    /// # Returns
    /// - `Ok(String)` - Relative path of the stored avatar
    /// - `Err(AppError)` - Write or database failure; no partial state is left
    pub async fn set_avatar(
        &self,
        media: &MediaStorage,
        user: &User,
        image: DecodedImage,
    ) -> Result<String, AppError> {
        let path = media.save(AVATAR_IMAGES, &image).await?;

        if let Err(err) = UserRepository::new(self.db)
            .set_avatar(user.id, Some(path.clone()))
            .await
        {
            media.delete(&path).await;
            return Err(err.into());
        }

        if let Some(old) = &user.avatar {
            media.delete(old).await;
        }

        Ok(path)
    }

    /// Clears the user's avatar and removes its file.
    pub async fn delete_avatar(&self, media: &MediaStorage, user: &User) -> Result<(), AppError> {
        UserRepository::new(self.db).set_avatar(user.id, None).await?;

        if let Some(old) = &user.avatar {
            media.delete(old).await;
        }

        Ok(())
    }
}
