use crate::server::{
    data::recipe::RecipeRepository,
    model::{
        pagination::PageRequest,
        recipe::{CreateRecipeParams, IngredientAmount, RecipeFilter, UpdateRecipeParams},
    },
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_author;
mod get_paginated;
mod update;

fn create_params(author_id: i32, ingredients: Vec<IngredientAmount>) -> CreateRecipeParams {
    CreateRecipeParams {
        author_id,
        name: "Pancakes".to_string(),
        image: "recipes/pancakes.png".to_string(),
        text: "Mix and fry".to_string(),
        cooking_time: 25,
        short_link: "Abc12345".to_string(),
        ingredients,
    }
}
