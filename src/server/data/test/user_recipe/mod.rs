use crate::server::data::user_recipe::{RecipeList, UserRecipeRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod recipe_ids_in;
mod shopping_list;
