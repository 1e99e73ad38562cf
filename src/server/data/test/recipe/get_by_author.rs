use super::*;

/// Tests fetching an author's recipes with a limit.
///
/// Verifies that the newest recipes are returned first, the limit truncates
/// the list, and the count ignores the limit.
///
/// Expected: two newest recipes and a count of three
#[tokio::test]
async fn limits_and_counts_author_recipes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_foodgram_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let now = Utc::now();
    let mut created = Vec::new();
    for days in [3, 2, 1] {
        let recipe = factory::recipe::RecipeFactory::new(db, author.id)
            .pub_date(now - Duration::days(days))
            .build()
            .await?;
        created.push(recipe.id);
    }

    let repo = RecipeRepository::new(db);

    let limited = repo.get_by_author(author.id, Some(2)).await?;
    let ids: Vec<_> = limited.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![created[2], created[1]]);

    assert_eq!(repo.get_by_author(author.id, None).await?.len(), 3);
    assert_eq!(repo.count_by_author(author.id).await?, 3);

    Ok(())
}
