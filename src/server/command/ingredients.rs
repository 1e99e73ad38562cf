use std::path::Path;

use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    model::ingredient::NewIngredient,
    service::ingredient::{ImportSummary, IngredientService},
};

/// Imports ingredients from a JSON file holding `[{"name", "measurement_unit"}]`.
///
/// Pairs already in the database are skipped, so the command can be rerun.
pub async fn load_ingredients(db: &DatabaseConnection, path: &Path) -> Result<ImportSummary, AppError> {
    let raw = tokio::fs::read_to_string(path).await?;
    let ingredients: Vec<NewIngredient> = serde_json::from_str(&raw)?;

    tracing::info!(
        "Importing {} ingredients from {}",
        ingredients.len(),
        path.display()
    );

    IngredientService::new(db).import(ingredients).await
}
