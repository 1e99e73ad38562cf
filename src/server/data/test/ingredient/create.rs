use super::*;

/// Tests importing an ingredient.
///
/// Verifies that the created ingredient can be found by ID and that
/// `exists` matches on the exact name and unit pair.
///
/// Expected: Ok with the ingredient stored
#[tokio::test]
async fn creates_ingredient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = IngredientRepository::new(db);
    let created = repo
        .create(NewIngredient {
            name: "butter".to_string(),
            measurement_unit: "g".to_string(),
        })
        .await?;

    let found = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(found, created);
    assert!(repo.exists("butter", "g").await?);
    assert!(!repo.exists("butter", "kg").await?);

    Ok(())
}

/// Tests fetching several ingredients by ID.
///
/// Expected: only the existing IDs are returned
#[tokio::test]
async fn finds_existing_ids_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_ingredient(db).await?;
    let second = factory::create_ingredient(db).await?;

    let repo = IngredientRepository::new(db);
    let found = repo.find_by_ids(&[first.id, second.id, 9999]).await?;

    assert_eq!(found.len(), 2);

    Ok(())
}
