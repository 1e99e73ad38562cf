use super::*;

/// Tests updating some recipe fields and replacing the ingredient set.
///
/// Verifies that fields passed as `None` keep their value and the previous
/// ingredient lines are removed.
///
/// Expected: Ok with new name, old text and only the new ingredient line
#[tokio::test]
async fn updates_fields_and_replaces_ingredients() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, old_ingredient, recipe) =
        factory::helpers::create_recipe_with_dependencies(db).await?;
    let new_ingredient = factory::create_ingredient(db).await?;

    let repo = RecipeRepository::new(db);
    repo.update(UpdateRecipeParams {
        id: recipe.id,
        name: Some("Renamed".to_string()),
        image: None,
        text: None,
        cooking_time: Some(90),
        ingredients: vec![IngredientAmount {
            ingredient_id: new_ingredient.id,
            amount: 7,
        }],
    })
    .await?;

    let updated = repo.find_by_id(recipe.id).await?.unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.text, recipe.text);
    assert_eq!(updated.image, recipe.image);
    assert_eq!(updated.cooking_time, 90);

    let lines = repo.get_ingredients(&[recipe.id]).await?;
    let lines = &lines[&recipe.id];
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].ingredient_id, new_ingredient.id);
    assert_ne!(lines[0].ingredient_id, old_ingredient.id);

    Ok(())
}

/// Tests an update that only changes ingredients.
///
/// Expected: Ok with recipe fields untouched
#[tokio::test]
async fn updates_ingredients_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, ingredient, recipe) = factory::helpers::create_recipe_with_dependencies(db).await?;

    let repo = RecipeRepository::new(db);
    repo.update(UpdateRecipeParams {
        id: recipe.id,
        name: None,
        image: None,
        text: None,
        cooking_time: None,
        ingredients: vec![IngredientAmount {
            ingredient_id: ingredient.id,
            amount: 5,
        }],
    })
    .await?;

    let updated = repo.find_by_id(recipe.id).await?.unwrap();
    assert_eq!(updated.name, recipe.name);

    let lines = repo.get_ingredients(&[recipe.id]).await?;
    assert_eq!(lines[&recipe.id][0].amount, 5);

    Ok(())
}
