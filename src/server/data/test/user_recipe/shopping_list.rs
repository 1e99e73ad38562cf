use super::*;

/// Tests aggregating the shopping list.
///
/// Verifies that amounts of the same ingredient are summed across recipes in
/// the cart, that lines are ordered by name, and that recipes outside the cart
/// are ignored.
///
/// Expected: "flour" 350 g followed by "milk" 200 ml
#[tokio::test]
async fn sums_amounts_across_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let user = factory::create_user(db).await?;
    let flour = factory::ingredient::IngredientFactory::new(db)
        .name("flour")
        .build()
        .await?;
    let milk = factory::ingredient::IngredientFactory::new(db)
        .name("milk")
        .measurement_unit("ml")
        .build()
        .await?;

    let pancakes = factory::create_recipe(db, author.id).await?;
    factory::add_recipe_ingredient(db, pancakes.id, milk.id, 200).await?;
    factory::add_recipe_ingredient(db, pancakes.id, flour.id, 150).await?;
    let bread = factory::create_recipe(db, author.id).await?;
    factory::add_recipe_ingredient(db, bread.id, flour.id, 200).await?;
    let skipped = factory::create_recipe(db, author.id).await?;
    factory::add_recipe_ingredient(db, skipped.id, flour.id, 1000).await?;

    factory::add_to_shopping_cart(db, user.id, pancakes.id).await?;
    factory::add_to_shopping_cart(db, user.id, bread.id).await?;

    let repo = UserRecipeRepository::new(db);
    let list = repo.shopping_list(user.id).await?;

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].name, "flour");
    assert_eq!(list[0].measurement_unit, "g");
    assert_eq!(list[0].total, 350);
    assert_eq!(list[1].name, "milk");
    assert_eq!(list[1].total, 200);

    Ok(())
}

/// Tests the shopping list of an empty cart.
///
/// Expected: Ok with no lines
#[tokio::test]
async fn returns_empty_list_for_empty_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRecipeRepository::new(db);

    assert!(repo.shopping_list(user.id).await?.is_empty());

    Ok(())
}
