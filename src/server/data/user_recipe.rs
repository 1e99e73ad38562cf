//! Per-user recipe lists: favorites and the shopping cart.
//!
//! Both lists have the same shape (user, recipe) and the same rules, so one
//! repository serves both and [`RecipeList`] selects the table.

use std::collections::{BTreeMap, HashSet};

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::server::model::recipe::ShoppingListItem;

/// Which per-user recipe list an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeList {
    Favorites,
    ShoppingCart,
}

pub struct UserRecipeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRecipeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a recipe to one of the user's lists.
    ///
    /// # Returns
    /// - `Ok(())` - Entry created
    /// - `Err(DbErr)` - Insert failed, including the unique (user, recipe) violation
    pub async fn add(&self, list: RecipeList, user_id: i32, recipe_id: i32) -> Result<(), DbErr> {
        match list {
            RecipeList::Favorites => {
                entity::favorite::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    recipe_id: ActiveValue::Set(recipe_id),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
            RecipeList::ShoppingCart => {
                entity::shopping_cart::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    recipe_id: ActiveValue::Set(recipe_id),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }

    /// Removes a recipe from one of the user's lists.
    ///
    /// # Returns
    /// - `Ok(true)` - Entry removed
    /// - `Ok(false)` - Recipe was not in the list
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove(
        &self,
        list: RecipeList,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<bool, DbErr> {
        let result = match list {
            RecipeList::Favorites => {
                entity::prelude::Favorite::delete_many()
                    .filter(entity::favorite::Column::UserId.eq(user_id))
                    .filter(entity::favorite::Column::RecipeId.eq(recipe_id))
                    .exec(self.db)
                    .await?
            }
            RecipeList::ShoppingCart => {
                entity::prelude::ShoppingCart::delete_many()
                    .filter(entity::shopping_cart::Column::UserId.eq(user_id))
                    .filter(entity::shopping_cart::Column::RecipeId.eq(recipe_id))
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected > 0)
    }

    pub async fn contains(
        &self,
        list: RecipeList,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<bool, DbErr> {
        let count = match list {
            RecipeList::Favorites => {
                entity::prelude::Favorite::find()
                    .filter(entity::favorite::Column::UserId.eq(user_id))
                    .filter(entity::favorite::Column::RecipeId.eq(recipe_id))
                    .count(self.db)
                    .await?
            }
            RecipeList::ShoppingCart => {
                entity::prelude::ShoppingCart::find()
                    .filter(entity::shopping_cart::Column::UserId.eq(user_id))
                    .filter(entity::shopping_cart::Column::RecipeId.eq(recipe_id))
                    .count(self.db)
                    .await?
            }
        };

        Ok(count > 0)
    }

    /// Returns the subset of `recipe_ids` present in the user's list.
    ///
    /// Used to fill the `is_favorited` / `is_in_shopping_cart` flags for a whole
    /// page of recipes with a single query.
    pub async fn recipe_ids_in(
        &self,
        list: RecipeList,
        user_id: i32,
        recipe_ids: &[i32],
    ) -> Result<HashSet<i32>, DbErr> {
        if recipe_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let ids: Vec<i32> = match list {
            RecipeList::Favorites => {
                entity::prelude::Favorite::find()
                    .select_only()
                    .column(entity::favorite::Column::RecipeId)
                    .filter(entity::favorite::Column::UserId.eq(user_id))
                    .filter(entity::favorite::Column::RecipeId.is_in(recipe_ids.to_vec()))
                    .into_tuple()
                    .all(self.db)
                    .await?
            }
            RecipeList::ShoppingCart => {
                entity::prelude::ShoppingCart::find()
                    .select_only()
                    .column(entity::shopping_cart::Column::RecipeId)
                    .filter(entity::shopping_cart::Column::UserId.eq(user_id))
                    .filter(entity::shopping_cart::Column::RecipeId.is_in(recipe_ids.to_vec()))
                    .into_tuple()
                    .all(self.db)
                    .await?
            }
        };

        Ok(ids.into_iter().collect())
    }

    /// Sums ingredient amounts across every recipe in the user's shopping cart.
    ///
    /// Lines are grouped by (ingredient name, measurement unit) and ordered by
    /// name, then unit.
    ///
    /// # Returns
    /// - `Ok(Vec<ShoppingListItem>)` - Aggregated lines, empty when the cart is empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn shopping_list(&self, user_id: i32) -> Result<Vec<ShoppingListItem>, DbErr> {
        let recipe_ids: Vec<i32> = entity::prelude::ShoppingCart::find()
            .select_only()
            .column(entity::shopping_cart::Column::RecipeId)
            .filter(entity::shopping_cart::Column::UserId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await?;

        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::RecipeIngredient::find()
            .filter(entity::recipe_ingredient::Column::RecipeId.is_in(recipe_ids))
            .find_also_related(entity::prelude::Ingredient)
            .all(self.db)
            .await?;

        let mut totals: BTreeMap<(String, String), i64> = BTreeMap::new();
        for (row, ingredient) in rows {
            let Some(ingredient) = ingredient else {
                continue;
            };

            *totals
                .entry((ingredient.name, ingredient.measurement_unit))
                .or_default() += i64::from(row.amount);
        }

        Ok(totals
            .into_iter()
            .map(|((name, measurement_unit), total)| ShoppingListItem {
                name,
                measurement_unit,
                total,
            })
            .collect())
    }
}
