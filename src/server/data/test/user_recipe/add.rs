use super::*;

/// Tests adding and removing a favorite.
///
/// Verifies that the entry is visible through `contains` and that `remove`
/// reports whether something was removed.
///
/// Expected: contained after add, removed once
#[tokio::test]
async fn adds_and_removes_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, recipe) = factory::helpers::create_recipe_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;

    let repo = UserRecipeRepository::new(db);
    repo.add(RecipeList::Favorites, user.id, recipe.id).await?;

    assert!(repo.contains(RecipeList::Favorites, user.id, recipe.id).await?);
    assert!(!repo.contains(RecipeList::ShoppingCart, user.id, recipe.id).await?);

    assert!(repo.remove(RecipeList::Favorites, user.id, recipe.id).await?);
    assert!(!repo.remove(RecipeList::Favorites, user.id, recipe.id).await?);

    Ok(())
}

/// Tests that the two lists are independent.
///
/// Expected: removing from the cart leaves the favorite in place
#[tokio::test]
async fn keeps_lists_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, recipe) = factory::helpers::create_recipe_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;

    let repo = UserRecipeRepository::new(db);
    repo.add(RecipeList::Favorites, user.id, recipe.id).await?;
    repo.add(RecipeList::ShoppingCart, user.id, recipe.id).await?;

    assert!(repo.remove(RecipeList::ShoppingCart, user.id, recipe.id).await?);
    assert!(repo.contains(RecipeList::Favorites, user.id, recipe.id).await?);

    Ok(())
}
