use super::*;

/// Tests listing recipes newest first.
///
/// Expected: recipes ordered by publication date descending
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let now = Utc::now();
    let old = factory::recipe::RecipeFactory::new(db, author.id)
        .pub_date(now - Duration::days(2))
        .build()
        .await?;
    let new = factory::recipe::RecipeFactory::new(db, author.id)
        .pub_date(now)
        .build()
        .await?;
    let middle = factory::recipe::RecipeFactory::new(db, author.id)
        .pub_date(now - Duration::days(1))
        .build()
        .await?;

    let repo = RecipeRepository::new(db);
    let (recipes, total) = repo
        .get_paginated(RecipeFilter::default(), PageRequest::new(None, None).unwrap())
        .await?;

    assert_eq!(total, 3);
    let ids: Vec<_> = recipes.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![new.id, middle.id, old.id]);

    Ok(())
}

/// Tests filtering recipes by author.
///
/// Expected: only the author's recipes
#[tokio::test]
async fn filters_by_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let mine = factory::create_recipe(db, author.id).await?;
    factory::create_recipe(db, other.id).await?;

    let repo = RecipeRepository::new(db);
    let (recipes, total) = repo
        .get_paginated(
            RecipeFilter {
                author_id: Some(author.id),
                ..Default::default()
            },
            PageRequest::new(None, None).unwrap(),
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(recipes[0].id, mine.id);

    Ok(())
}

/// Tests restricting the listing to a user's favorites and shopping cart.
///
/// Verifies that both restrictions can be combined and that other users'
/// lists are not taken into account.
///
/// Expected: favorites filter returns two recipes, combined filter returns one
#[tokio::test]
async fn filters_by_favorites_and_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;
    let other_reader = factory::create_user(db).await?;
    let first = factory::create_recipe(db, author.id).await?;
    let second = factory::create_recipe(db, author.id).await?;
    let third = factory::create_recipe(db, author.id).await?;

    factory::add_favorite(db, reader.id, first.id).await?;
    factory::add_favorite(db, reader.id, second.id).await?;
    factory::add_favorite(db, other_reader.id, third.id).await?;
    factory::add_to_shopping_cart(db, reader.id, second.id).await?;

    let repo = RecipeRepository::new(db);
    let page = PageRequest::new(None, None).unwrap();

    let (_, favorites) = repo
        .get_paginated(
            RecipeFilter {
                favorited_by: Some(reader.id),
                ..Default::default()
            },
            page,
        )
        .await?;
    assert_eq!(favorites, 2);

    let (recipes, both) = repo
        .get_paginated(
            RecipeFilter {
                favorited_by: Some(reader.id),
                in_cart_of: Some(reader.id),
                ..Default::default()
            },
            page,
        )
        .await?;
    assert_eq!(both, 1);
    assert_eq!(recipes[0].id, second.id);

    Ok(())
}
