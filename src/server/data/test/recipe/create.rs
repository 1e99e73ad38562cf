use super::*;

/// Tests creating a recipe with ingredients.
///
/// Verifies that the recipe row and its ingredient lines are written and that
/// the lines come back in the order they were given.
///
/// Expected: Ok with recipe and two ingredient lines
#[tokio::test]
async fn creates_recipe_with_ingredients() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let flour = factory::ingredient::IngredientFactory::new(db)
        .name("flour")
        .build()
        .await?;
    let milk = factory::ingredient::IngredientFactory::new(db)
        .name("milk")
        .measurement_unit("ml")
        .build()
        .await?;

    let repo = RecipeRepository::new(db);
    let recipe = repo
        .create(create_params(
            author.id,
            vec![
                IngredientAmount {
                    ingredient_id: milk.id,
                    amount: 300,
                },
                IngredientAmount {
                    ingredient_id: flour.id,
                    amount: 200,
                },
            ],
        ))
        .await?;

    assert_eq!(recipe.author_id, author.id);
    assert_eq!(recipe.name, "Pancakes");
    assert_eq!(recipe.short_link, "Abc12345");

    let lines = repo.get_ingredients(&[recipe.id]).await?;
    let lines = &lines[&recipe.id];
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].name, "milk");
    assert_eq!(lines[0].measurement_unit, "ml");
    assert_eq!(lines[0].amount, 300);
    assert_eq!(lines[1].ingredient_id, flour.id);

    assert_eq!(
        repo.find_by_short_link("Abc12345").await?.map(|r| r.id),
        Some(recipe.id)
    );
    assert!(repo.short_link_exists("Abc12345").await?);

    Ok(())
}

/// Tests that a failing ingredient insert rolls back the recipe.
///
/// Verifies that referencing a missing ingredient leaves no recipe row behind.
///
/// Expected: Err, and no recipes stored
#[tokio::test]
async fn rolls_back_on_invalid_ingredient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;

    let repo = RecipeRepository::new(db);
    let result = repo
        .create(create_params(
            author.id,
            vec![IngredientAmount {
                ingredient_id: 4242,
                amount: 1,
            }],
        ))
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Recipe::find().count(db).await?, 0);

    Ok(())
}
