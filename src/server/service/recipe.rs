//! Recipe service for business logic.
//!
//! Owns the rules around recipes that the repository does not know about:
//! ingredient existence, author-only edits, image files on disk and short link
//! allocation. Every read is resolved for a viewer so the favorite, cart and
//! subscription flags reflect the caller.

use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        ingredient::IngredientRepository,
        recipe::RecipeRepository,
        user::UserRepository,
        user_recipe::{RecipeList, UserRecipeRepository},
    },
    error::{
        auth::AuthError, internal::InternalError, validation::ValidationError, AppError,
    },
    media::{MediaStorage, RECIPE_IMAGES},
    model::{
        pagination::{Page, PageRequest},
        recipe::{
            CreateRecipeParams, Recipe, RecipeDetail, RecipeFilter, RecipeInput,
            UpdateRecipeParams,
        },
        user::UserProfile,
    },
    service::user::UserService,
    util::random::short_link_code,
};

/// How many random codes to try before giving up on a unique short link.
const SHORT_LINK_ATTEMPTS: u32 = 10;

pub struct RecipeService<'a> {
    db: &'a DatabaseConnection,
    media: &'a MediaStorage,
}

impl<'a> RecipeService<'a> {
    /// Creates a new RecipeService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `media` - Storage for recipe images
    pub fn new(db: &'a DatabaseConnection, media: &'a MediaStorage) -> Self {
        Self { db, media }
    }

    /// Gets one page of recipes as seen by `viewer`.
    ///
    /// # Returns
    /// - `Ok(Page<RecipeDetail>)` - Recipes newest first
    /// - `Err(AppError::NotFound)` - Page past the end
    pub async fn get_paginated(
        &self,
        viewer: Option<i32>,
        filter: RecipeFilter,
        request: PageRequest,
    ) -> Result<Page<RecipeDetail>, AppError> {
        let (recipes, total) = RecipeRepository::new(self.db)
            .get_paginated(filter, request)
            .await?;
        request.ensure_in_range(total)?;

        let details = self.details(viewer, recipes).await?;

        Ok(Page::new(details, total, request))
    }

    /// Gets a single recipe as seen by `viewer`.
    pub async fn get(&self, viewer: Option<i32>, id: i32) -> Result<RecipeDetail, AppError> {
        let recipe = self.find(id).await?;

        self.detail(viewer, recipe).await
    }

    /// Publishes a new recipe.
    ///
    /// The image is written before the database rows and removed again if the
    /// insert fails.
    ///
    /// # Arguments
    /// - `author_id` - The publishing user
    /// - `input` - Payload validated in create mode
    ///
    /// # Returns
    /// - `Ok(RecipeDetail)` - The created recipe as seen by its author
    /// - `Err(AppError::ValidationErr)` - Unknown ingredient IDs or missing fields
    /// - `Err(AppError)` - Storage, database or short link allocation failure
    pub async fn create(&self, author_id: i32, input: RecipeInput) -> Result<RecipeDetail, AppError> {
        self.ensure_ingredients_exist(&input).await?;

        let RecipeInput {
            ingredients,
            image,
            name,
            text,
            cooking_time,
        } = input;
        let (Some(image), Some(name), Some(text), Some(cooking_time)) =
            (image, name, text, cooking_time)
        else {
            return Err(ValidationError::field(
                "non_field_errors",
                "Image, name, text and cooking time are required.",
            )
            .into());
        };

        let repo = RecipeRepository::new(self.db);
        let short_link = self.unique_short_link(&repo).await?;
        let image = self.media.save(RECIPE_IMAGES, &image).await?;

        let recipe = match repo
            .create(CreateRecipeParams {
                author_id,
                name,
                image: image.clone(),
                text,
                cooking_time,
                short_link,
                ingredients,
            })
            .await
        {
            Ok(recipe) => recipe,
            Err(err) => {
                self.media.delete(&image).await;
                return Err(err.into());
            }
        };

        tracing::info!("User {} published recipe {}", author_id, recipe.id);

        self.detail(Some(author_id), recipe).await
    }

    /// Edits a recipe owned by `user_id`.
    ///
    /// Absent fields keep their value while the ingredient set is always replaced.
    /// A replaced image file is removed once the new one is committed.
    ///
    /// # Returns
    /// - `Ok(RecipeDetail)` - The updated recipe
    /// - `Err(AppError::NotFound)` - No recipe with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - `user_id` is not the author
    /// - `Err(AppError::ValidationErr)` - Unknown ingredient IDs
    pub async fn update(
        &self,
        user_id: i32,
        id: i32,
        input: RecipeInput,
    ) -> Result<RecipeDetail, AppError> {
        let existing = self.find(id).await?;
        ensure_author(user_id, &existing, "update")?;
        self.ensure_ingredients_exist(&input).await?;

        let new_image = match &input.image {
            Some(image) => Some(self.media.save(RECIPE_IMAGES, image).await?),
            None => None,
        };

        let result = RecipeRepository::new(self.db)
            .update(UpdateRecipeParams {
                id,
                name: input.name,
                image: new_image.clone(),
                text: input.text,
                cooking_time: input.cooking_time,
                ingredients: input.ingredients,
            })
            .await;

        match (result, new_image) {
            (Ok(()), Some(_)) => self.media.delete(&existing.image).await,
            (Ok(()), None) => {}
            (Err(err), new_image) => {
                if let Some(path) = new_image {
                    self.media.delete(&path).await;
                }
                return Err(err.into());
            }
        }

        let updated = RecipeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(InternalError::MissingAfterWrite {
                entity: "recipe",
                id,
            })?;

        self.detail(Some(user_id), updated).await
    }

    /// Deletes a recipe owned by `user_id` along with its image file.
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let existing = self.find(id).await?;
        ensure_author(user_id, &existing, "delete")?;

        RecipeRepository::new(self.db).delete(id).await?;
        self.media.delete(&existing.image).await;

        tracing::info!("User {} deleted recipe {}", user_id, id);

        Ok(())
    }

    /// Gets the short link code of a recipe.
    pub async fn short_link(&self, id: i32) -> Result<String, AppError> {
        Ok(self.find(id).await?.short_link)
    }

    /// Resolves a short link code to the recipe ID.
    pub async fn resolve_short_link(&self, code: &str) -> Result<i32, AppError> {
        RecipeRepository::new(self.db)
            .find_by_short_link(code)
            .await?
            .map(|recipe| recipe.id)
            .ok_or_else(|| AppError::not_found("Recipe"))
    }

    async fn find(&self, id: i32) -> Result<Recipe, AppError> {
        RecipeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe"))
    }

    async fn detail(&self, viewer: Option<i32>, recipe: Recipe) -> Result<RecipeDetail, AppError> {
        let id = recipe.id;

        self.details(viewer, vec![recipe])
            .await?
            .pop()
            .ok_or_else(|| InternalError::MissingAfterWrite { entity: "recipe", id }.into())
    }

    /// Resolves authors, ingredient lines and the viewer's flags for a list of
    /// recipes with a fixed number of queries.
    async fn details(
        &self,
        viewer: Option<i32>,
        recipes: Vec<Recipe>,
    ) -> Result<Vec<RecipeDetail>, AppError> {
        let recipe_ids: Vec<i32> = recipes.iter().map(|r| r.id).collect();
        let author_ids: Vec<i32> = recipes
            .iter()
            .map(|r| r.author_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let authors = UserRepository::new(self.db).find_by_ids(&author_ids).await?;
        let authors: HashMap<i32, UserProfile> = UserService::new(self.db)
            .profiles(viewer, authors)
            .await?
            .into_iter()
            .map(|profile| (profile.user.id, profile))
            .collect();

        let mut ingredients = RecipeRepository::new(self.db)
            .get_ingredients(&recipe_ids)
            .await?;

        let (favorited, in_cart) = match viewer {
            Some(viewer) => {
                let lists = UserRecipeRepository::new(self.db);
                (
                    lists
                        .recipe_ids_in(RecipeList::Favorites, viewer, &recipe_ids)
                        .await?,
                    lists
                        .recipe_ids_in(RecipeList::ShoppingCart, viewer, &recipe_ids)
                        .await?,
                )
            }
            None => (HashSet::new(), HashSet::new()),
        };

        let mut details = Vec::with_capacity(recipes.len());
        for recipe in recipes {
            // Several recipes on a page can share an author.
            let author = authors
                .get(&recipe.author_id)
                .cloned()
                .ok_or(InternalError::MissingRelation {
                    entity: "user",
                    id: recipe.author_id,
                })?;

            details.push(RecipeDetail {
                author,
                ingredients: ingredients.remove(&recipe.id).unwrap_or_default(),
                is_favorited: favorited.contains(&recipe.id),
                is_in_shopping_cart: in_cart.contains(&recipe.id),
                recipe,
            });
        }

        Ok(details)
    }

    async fn ensure_ingredients_exist(&self, input: &RecipeInput) -> Result<(), AppError> {
        let ids = input.ingredient_ids();
        let found: HashSet<i32> = IngredientRepository::new(self.db)
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|i| i.id)
            .collect();

        let mut errors = ValidationError::new();
        for id in ids.into_iter().filter(|id| !found.contains(id)) {
            errors.add("ingredients", format!("Ingredient {} does not exist.", id));
        }
        errors.into_result()?;

        Ok(())
    }

    async fn unique_short_link(&self, repo: &RecipeRepository<'_>) -> Result<String, AppError> {
        for _ in 0..SHORT_LINK_ATTEMPTS {
            let code = short_link_code();
            if !repo.short_link_exists(&code).await? {
                return Ok(code);
            }
        }

        Err(InternalError::ShortLinkExhausted {
            attempts: SHORT_LINK_ATTEMPTS,
        }
        .into())
    }
}

pub fn ensure_author(user_id: i32, recipe: &Recipe, action: &str) -> Result<(), AppError> {
    if recipe.author_id != user_id {
        return Err(AuthError::AccessDenied(
            user_id,
            format!(
                "attempted to {} recipe {} owned by user {}",
                action, recipe.id, recipe.author_id
            ),
        )
        .into());
    }

    Ok(())
}
