//! Following authors.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{recipe::RecipeRepository, subscription::SubscriptionRepository, user::UserRepository},
    error::AppError,
    model::{
        pagination::{Page, PageRequest},
        subscription::AuthorWithRecipes,
        user::User,
    },
};

pub struct SubscriptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Makes `user_id` follow `author_id`.
    ///
    /// # Arguments
    /// - `user_id` - The follower
    /// - `author_id` - The user to follow
    /// - `recipes_limit` - How many of the author's recipes to include in the result
    ///
    /// # Returns
    /// - `Ok(AuthorWithRecipes)` - The followed author
    /// - `Err(AppError::NotFound)` - No user with `author_id`
    /// - `Err(AppError::BadRequest)` - Following oneself or already following
    pub async fn subscribe(
        &self,
        user_id: i32,
        author_id: i32,
        recipes_limit: Option<u64>,
    ) -> Result<AuthorWithRecipes, AppError> {
        let author = UserRepository::new(self.db)
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        if user_id == author_id {
            return Err(AppError::BadRequest(
                "You cannot subscribe to yourself.".to_string(),
            ));
        }

        let duplicate = "You are already subscribed to this user.";

        let repo = SubscriptionRepository::new(self.db);
        if repo.exists(user_id, author_id).await? {
            return Err(AppError::BadRequest(duplicate.to_string()));
        }

        repo.create(user_id, author_id)
            .await
            .map_err(|err| AppError::or_duplicate(err, duplicate))?;

        self.with_recipes(author, recipes_limit).await
    }

    /// Stops `user_id` from following `author_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Subscription removed
    /// - `Err(AppError::NotFound)` - No user with `author_id`
    /// - `Err(AppError::BadRequest)` - Not following that user
    pub async fn unsubscribe(&self, user_id: i32, author_id: i32) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        let removed = SubscriptionRepository::new(self.db)
            .delete(user_id, author_id)
            .await?;
        if !removed {
            return Err(AppError::BadRequest(
                "You are not subscribed to this user.".to_string(),
            ));
        }

        Ok(())
    }

    /// Gets one page of the authors `user_id` follows with their newest recipes.
    pub async fn get_paginated(
        &self,
        user_id: i32,
        request: PageRequest,
        recipes_limit: Option<u64>,
    ) -> Result<Page<AuthorWithRecipes>, AppError> {
        let (authors, total) = SubscriptionRepository::new(self.db)
            .get_authors_paginated(user_id, request)
            .await?;
        request.ensure_in_range(total)?;

        let mut items = Vec::with_capacity(authors.len());
        for author in authors {
            items.push(self.with_recipes(author, recipes_limit).await?);
        }

        Ok(Page::new(items, total, request))
    }

    async fn with_recipes(
        &self,
        author: User,
        recipes_limit: Option<u64>,
    ) -> Result<AuthorWithRecipes, AppError> {
        let recipe_repo = RecipeRepository::new(self.db);

        let recipes = recipe_repo.get_by_author(author.id, recipes_limit).await?;
        let recipes_count = recipe_repo.count_by_author(author.id).await?;

        Ok(AuthorWithRecipes {
            author,
            recipes,
            recipes_count,
        })
    }
}
