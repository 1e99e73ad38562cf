use super::*;

/// Tests checking list membership for a page of recipes.
///
/// Expected: only the recipes in the user's cart
#[tokio::test]
async fn returns_recipes_in_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let user = factory::create_user(db).await?;
    let first = factory::create_recipe(db, author.id).await?;
    let second = factory::create_recipe(db, author.id).await?;
    factory::add_to_shopping_cart(db, user.id, second.id).await?;
    factory::add_to_shopping_cart(db, author.id, first.id).await?;

    let repo = UserRecipeRepository::new(db);
    let result = repo
        .recipe_ids_in(RecipeList::ShoppingCart, user.id, &[first.id, second.id])
        .await?;

    assert_eq!(result.len(), 1);
    assert!(result.contains(&second.id));
    assert!(repo
        .recipe_ids_in(RecipeList::Favorites, user.id, &[first.id, second.id])
        .await?
        .is_empty());

    Ok(())
}
