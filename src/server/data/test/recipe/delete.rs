use super::*;

/// Tests deleting a recipe.
///
/// Verifies that the recipe, its ingredient lines and every favorite and
/// shopping cart entry pointing at it are removed.
///
/// Expected: Ok(true) and no dependent rows left
#[tokio::test]
async fn deletes_recipe_and_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, recipe) = factory::helpers::create_recipe_with_dependencies(db).await?;
    let reader = factory::create_user(db).await?;
    factory::add_favorite(db, reader.id, recipe.id).await?;
    factory::add_to_shopping_cart(db, reader.id, recipe.id).await?;

    let repo = RecipeRepository::new(db);

    assert!(repo.delete(recipe.id).await?);
    assert!(repo.find_by_id(recipe.id).await?.is_none());
    assert_eq!(
        entity::prelude::RecipeIngredient::find()
            .filter(entity::recipe_ingredient::Column::RecipeId.eq(recipe.id))
            .count(db)
            .await?,
        0
    );
    assert_eq!(entity::prelude::Favorite::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ShoppingCart::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a recipe that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_recipe() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RecipeRepository::new(db);

    assert!(!repo.delete(999).await?);

    Ok(())
}
