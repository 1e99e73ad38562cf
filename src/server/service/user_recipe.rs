//! Favorites and shopping cart.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        recipe::RecipeRepository,
        user_recipe::{RecipeList, UserRecipeRepository},
    },
    error::AppError,
    model::recipe::{render_shopping_list, Recipe},
};

pub struct UserRecipeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRecipeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a recipe to one of the user's lists.
    ///
    /// # Returns
    /// - `Ok(Recipe)` - The added recipe, for the short response form
    /// - `Err(AppError::NotFound)` - No recipe with that ID
    /// - `Err(AppError::BadRequest)` - Recipe already in the list
    pub async fn add(
        &self,
        list: RecipeList,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<Recipe, AppError> {
        let recipe = RecipeRepository::new(self.db)
            .find_by_id(recipe_id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe"))?;

        let duplicate = format!("Recipe is already in {}.", list_name(list));

        let repo = UserRecipeRepository::new(self.db);
        if repo.contains(list, user_id, recipe_id).await? {
            return Err(AppError::BadRequest(duplicate));
        }

        repo.add(list, user_id, recipe_id)
            .await
            .map_err(|err| AppError::or_duplicate(err, duplicate))?;

        Ok(recipe)
    }

    /// Removes a recipe from one of the user's lists.
    ///
    /// # Returns
    /// - `Ok(())` - Recipe removed
    /// - `Err(AppError::NotFound)` - No such recipe, or it is not in the list
    pub async fn remove(&self, list: RecipeList, user_id: i32, recipe_id: i32) -> Result<(), AppError> {
        RecipeRepository::new(self.db)
            .find_by_id(recipe_id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe"))?;

        let removed = UserRecipeRepository::new(self.db)
            .remove(list, user_id, recipe_id)
            .await?;
        if !removed {
            return Err(AppError::NotFound(format!(
                "Recipe is not in {}.",
                list_name(list)
            )));
        }

        Ok(())
    }

    /// Renders the user's aggregated shopping list as plain text.
    pub async fn shopping_list(&self, user_id: i32) -> Result<String, AppError> {
        let items = UserRecipeRepository::new(self.db)
            .shopping_list(user_id)
            .await?;

        Ok(render_shopping_list(&items))
    }
}

fn list_name(list: RecipeList) -> &'static str {
    match list {
        RecipeList::Favorites => "favorites",
        RecipeList::ShoppingCart => "the shopping cart",
    }
}
