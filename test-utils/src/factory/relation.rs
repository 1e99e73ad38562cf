//! Factories for user-to-user and user-to-recipe relations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Makes `user_id` follow `author_id`.
pub async fn create_subscription(
    db: &DatabaseConnection,
    user_id: i32,
    author_id: i32,
) -> Result<entity::subscription::Model, DbErr> {
    entity::subscription::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        author_id: ActiveValue::Set(author_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds a recipe to the user's favorites.
pub async fn add_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    recipe_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        recipe_id: ActiveValue::Set(recipe_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds a recipe to the user's shopping cart.
pub async fn add_to_shopping_cart(
    db: &DatabaseConnection,
    user_id: i32,
    recipe_id: i32,
) -> Result<entity::shopping_cart::Model, DbErr> {
    entity::shopping_cart::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        recipe_id: ActiveValue::Set(recipe_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
