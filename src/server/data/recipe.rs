//! Recipe repository.
//!
//! Recipes and their ingredient rows are always written together inside one
//! transaction so a recipe is never visible with a partial ingredient list.

use std::collections::HashMap;

use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};

use crate::server::model::{
    pagination::PageRequest,
    recipe::{
        CreateRecipeParams, IngredientAmount, Recipe, RecipeFilter, RecipeIngredient,
        UpdateRecipeParams,
    },
};

pub struct RecipeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a recipe with its ingredient rows.
    ///
    /// # Arguments
    /// - `params` - Row values including the stored image path and short link
    ///
    /// # Returns
    /// - `Ok(Recipe)` - The created recipe
    /// - `Err(DbErr)` - Insert failed; nothing was written
    pub async fn create(&self, params: CreateRecipeParams) -> Result<Recipe, DbErr> {
        let txn = self.db.begin().await?;

        let recipe = entity::recipe::ActiveModel {
            author_id: ActiveValue::Set(params.author_id),
            name: ActiveValue::Set(params.name),
            image: ActiveValue::Set(params.image),
            text: ActiveValue::Set(params.text),
            cooking_time: ActiveValue::Set(params.cooking_time),
            short_link: ActiveValue::Set(params.short_link),
            pub_date: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_ingredients(&txn, recipe.id, &params.ingredients).await?;

        txn.commit().await?;

        Ok(Recipe::from_entity(recipe))
    }

    /// Applies changes to a recipe and replaces its ingredient rows.
    ///
    /// # Returns
    /// - `Ok(())` - Changes written
    /// - `Err(DbErr)` - Update failed; nothing was written
    pub async fn update(&self, params: UpdateRecipeParams) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let mut recipe = entity::recipe::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            ..Default::default()
        };
        if let Some(name) = params.name {
            recipe.name = ActiveValue::Set(name);
        }
        if let Some(image) = params.image {
            recipe.image = ActiveValue::Set(image);
        }
        if let Some(text) = params.text {
            recipe.text = ActiveValue::Set(text);
        }
        if let Some(cooking_time) = params.cooking_time {
            recipe.cooking_time = ActiveValue::Set(cooking_time);
        }
        if recipe.is_changed() {
            recipe.update(&txn).await?;
        }

        entity::prelude::RecipeIngredient::delete_many()
            .filter(entity::recipe_ingredient::Column::RecipeId.eq(params.id))
            .exec(&txn)
            .await?;
        insert_ingredients(&txn, params.id, &params.ingredients).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Deletes a recipe together with its ingredient rows and list entries.
    ///
    /// # Returns
    /// - `Ok(true)` - Recipe deleted
    /// - `Ok(false)` - No recipe with that ID
    /// - `Err(DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::RecipeIngredient::delete_many()
            .filter(entity::recipe_ingredient::Column::RecipeId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::RecipeId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::ShoppingCart::delete_many()
            .filter(entity::shopping_cart::Column::RecipeId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Recipe::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Recipe>, DbErr> {
        let entity = entity::prelude::Recipe::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Recipe::from_entity))
    }

    pub async fn find_by_short_link(&self, code: &str) -> Result<Option<Recipe>, DbErr> {
        let entity = entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::ShortLink.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(Recipe::from_entity))
    }

    pub async fn short_link_exists(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::ShortLink.eq(code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets one page of recipes, newest first.
    ///
    /// # Arguments
    /// - `filter` - Author and favorite / shopping cart restrictions
    /// - `request` - Page number and size
    ///
    /// # Returns
    /// - `Ok((recipes, total))` - Recipes on the page and the total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        filter: RecipeFilter,
        request: PageRequest,
    ) -> Result<(Vec<Recipe>, u64), DbErr> {
        let mut query = entity::prelude::Recipe::find();

        if let Some(author_id) = filter.author_id {
            query = query.filter(entity::recipe::Column::AuthorId.eq(author_id));
        }
        if let Some(user_id) = filter.favorited_by {
            query = query.filter(
                entity::recipe::Column::Id.in_subquery(
                    Query::select()
                        .column(entity::favorite::Column::RecipeId)
                        .from(entity::favorite::Entity)
                        .and_where(entity::favorite::Column::UserId.eq(user_id))
                        .to_owned(),
                ),
            );
        }
        if let Some(user_id) = filter.in_cart_of {
            query = query.filter(
                entity::recipe::Column::Id.in_subquery(
                    Query::select()
                        .column(entity::shopping_cart::Column::RecipeId)
                        .from(entity::shopping_cart::Entity)
                        .and_where(entity::shopping_cart::Column::UserId.eq(user_id))
                        .to_owned(),
                ),
            );
        }

        let paginator = query
            .order_by_desc(entity::recipe::Column::PubDate)
            .order_by_desc(entity::recipe::Column::Id)
            .paginate(self.db, request.per_page);

        let total = paginator.num_items().await?;
        if request.index().saturating_mul(request.per_page) >= total {
            return Ok((Vec::new(), total));
        }

        let recipes = paginator
            .fetch_page(request.index())
            .await?
            .into_iter()
            .map(Recipe::from_entity)
            .collect();

        Ok((recipes, total))
    }

    /// Gets the newest recipes of an author.
    ///
    /// # Arguments
    /// - `author_id` - Author whose recipes to fetch
    /// - `limit` - Maximum number of recipes, `None` for all
    pub async fn get_by_author(
        &self,
        author_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<Recipe>, DbErr> {
        let mut query = entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::AuthorId.eq(author_id))
            .order_by_desc(entity::recipe::Column::PubDate)
            .order_by_desc(entity::recipe::Column::Id);

        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Recipe::from_entity).collect())
    }

    pub async fn count_by_author(&self, author_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::AuthorId.eq(author_id))
            .count(self.db)
            .await
    }

    /// Gets the ingredient lines of several recipes at once.
    ///
    /// Lines keep the order in which they were written. Recipes without lines are
    /// absent from the map.
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, Vec<RecipeIngredient>>)` - Lines keyed by recipe ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_ingredients(
        &self,
        recipe_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<RecipeIngredient>>, DbErr> {
        if recipe_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::RecipeIngredient::find()
            .filter(entity::recipe_ingredient::Column::RecipeId.is_in(recipe_ids.to_vec()))
            .find_also_related(entity::prelude::Ingredient)
            .order_by_asc(entity::recipe_ingredient::Column::Id)
            .all(self.db)
            .await?;

        let mut lines: HashMap<i32, Vec<RecipeIngredient>> = HashMap::new();
        for (row, ingredient) in rows {
            let Some(ingredient) = ingredient else {
                continue;
            };

            lines.entry(row.recipe_id).or_default().push(RecipeIngredient {
                ingredient_id: ingredient.id,
                name: ingredient.name,
                measurement_unit: ingredient.measurement_unit,
                amount: row.amount,
            });
        }

        Ok(lines)
    }
}

async fn insert_ingredients(
    txn: &DatabaseTransaction,
    recipe_id: i32,
    ingredients: &[IngredientAmount],
) -> Result<(), DbErr> {
    if ingredients.is_empty() {
        return Ok(());
    }

    let rows = ingredients
        .iter()
        .map(|item| entity::recipe_ingredient::ActiveModel {
            recipe_id: ActiveValue::Set(recipe_id),
            ingredient_id: ActiveValue::Set(item.ingredient_id),
            amount: ActiveValue::Set(item.amount),
            ..Default::default()
        });

    entity::prelude::RecipeIngredient::insert_many(rows)
        .exec(txn)
        .await?;

    Ok(())
}
