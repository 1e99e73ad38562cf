//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an author with one recipe that uses one ingredient.
///
/// The recipe uses 100 units of a freshly created ingredient. Use the individual
/// factories when the test depends on specific names or amounts.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((author, ingredient, recipe))` - Created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_recipe_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::ingredient::Model,
        entity::recipe::Model,
    ),
    DbErr,
> {
    let author = crate::factory::user::create_user(db).await?;
    let ingredient = crate::factory::ingredient::create_ingredient(db).await?;
    let recipe = crate::factory::recipe::create_recipe(db, author.id).await?;
    crate::factory::recipe::add_recipe_ingredient(db, recipe.id, ingredient.id, 100).await?;

    Ok((author, ingredient, recipe))
}
