use super::*;

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    for name in ["sugar", "Salt", "flour", "sour cream", "50%_cocoa"] {
        factory::ingredient::IngredientFactory::new(db)
            .name(name)
            .build()
            .await?;
    }
    Ok(())
}

/// Tests listing every ingredient.
///
/// Expected: all ingredients ordered by name
#[tokio::test]
async fn lists_all_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = IngredientRepository::new(db);
    let result = repo.search(None).await?;

    let names: Vec<_> = result.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["50%_cocoa", "Salt", "flour", "sour cream", "sugar"]
    );

    Ok(())
}

/// Tests filtering ingredients by name prefix.
///
/// Verifies that the match ignores case and only matches at the start of the
/// name.
///
/// Expected: "Salt", "sour cream", "sugar" for prefix "S"
#[tokio::test]
async fn filters_by_case_insensitive_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = IngredientRepository::new(db);
    let result = repo.search(Some("S")).await?;

    let names: Vec<_> = result.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Salt", "sour cream", "sugar"]);
    assert!(repo.search(Some("our")).await?.is_empty());

    Ok(())
}

/// Tests that wildcard characters in the prefix match literally.
///
/// Expected: only the ingredient whose name really starts with "50%_"
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = IngredientRepository::new(db);

    assert_eq!(repo.search(Some("50%_")).await?.len(), 1);
    assert!(repo.search(Some("%")).await?.is_empty());
    assert!(repo.search(Some("_")).await?.is_empty());

    Ok(())
}
