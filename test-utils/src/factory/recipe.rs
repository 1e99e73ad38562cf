//! Recipe factory for creating recipes and their ingredient rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating recipes owned by a given author.
///
/// # Example
///
/// ```rust,ignore
/// let recipe = RecipeFactory::new(&db, author.id)
///     .name("Pancakes")
///     .cooking_time(15)
///     .build()
///     .await?;
/// ```
pub struct RecipeFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    name: String,
    image: String,
    text: String,
    cooking_time: i32,
    short_link: String,
    pub_date: DateTime<Utc>,
}

impl<'a> RecipeFactory<'a> {
    /// Creates a new RecipeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Recipe {id}"`
    /// - image: `"recipes/{id}.png"`
    /// - cooking_time: `30`
    /// - short_link: `"t{id}"` zero padded to 8 characters
    /// - pub_date: now
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            name: format!("Recipe {}", id),
            image: format!("recipes/{}.png", id),
            text: format!("Steps for recipe {}", id),
            cooking_time: 30,
            short_link: format!("t{:07}", id),
            pub_date: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn cooking_time(mut self, minutes: i32) -> Self {
        self.cooking_time = minutes;
        self
    }

    pub fn short_link(mut self, code: impl Into<String>) -> Self {
        self.short_link = code.into();
        self
    }

    /// Sets the publication time, which drives list ordering.
    pub fn pub_date(mut self, pub_date: DateTime<Utc>) -> Self {
        self.pub_date = pub_date;
        self
    }

    pub async fn build(self) -> Result<entity::recipe::Model, DbErr> {
        entity::recipe::ActiveModel {
            author_id: ActiveValue::Set(self.author_id),
            name: ActiveValue::Set(self.name),
            image: ActiveValue::Set(self.image),
            text: ActiveValue::Set(self.text),
            cooking_time: ActiveValue::Set(self.cooking_time),
            short_link: ActiveValue::Set(self.short_link),
            pub_date: ActiveValue::Set(self.pub_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a recipe with default values for the given author.
pub async fn create_recipe(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::recipe::Model, DbErr> {
    RecipeFactory::new(db, author_id).build().await
}

/// Attaches an ingredient with the given amount to a recipe.
pub async fn add_recipe_ingredient(
    db: &DatabaseConnection,
    recipe_id: i32,
    ingredient_id: i32,
    amount: i32,
) -> Result<entity::recipe_ingredient::Model, DbErr> {
    entity::recipe_ingredient::ActiveModel {
        recipe_id: ActiveValue::Set(recipe_id),
        ingredient_id: ActiveValue::Set(ingredient_id),
        amount: ActiveValue::Set(amount),
        ..Default::default()
    }
    .insert(db)
    .await
}
