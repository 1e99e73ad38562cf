use crate::server::{data::ingredient::IngredientRepository, model::ingredient::NewIngredient};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod search;
