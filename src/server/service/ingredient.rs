//! Ingredient lookups and bulk import.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::ingredient::IngredientRepository,
    error::AppError,
    model::ingredient::{Ingredient, NewIngredient},
};

/// Outcome of an ingredient import.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImportSummary {
    pub created: usize,
    pub skipped: usize,
}

pub struct IngredientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists ingredients, optionally only those whose name starts with `name`.
    pub async fn search(&self, name: Option<&str>) -> Result<Vec<Ingredient>, AppError> {
        let ingredients = IngredientRepository::new(self.db).search(name).await?;

        Ok(ingredients)
    }

    pub async fn get(&self, id: i32) -> Result<Ingredient, AppError> {
        IngredientRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Ingredient"))
    }

    /// Inserts every (name, unit) pair that does not exist yet.
    ///
    /// Blank entries and pairs repeated within the input are skipped.
    pub async fn import(&self, ingredients: Vec<NewIngredient>) -> Result<ImportSummary, AppError> {
        let repo = IngredientRepository::new(self.db);
        let mut summary = ImportSummary::default();

        for ingredient in ingredients {
            let ingredient = NewIngredient {
                name: ingredient.name.trim().to_string(),
                measurement_unit: ingredient.measurement_unit.trim().to_string(),
            };

            if ingredient.name.is_empty()
                || ingredient.measurement_unit.is_empty()
                || repo
                    .exists(&ingredient.name, &ingredient.measurement_unit)
                    .await?
            {
                summary.skipped += 1;
                continue;
            }

            repo.create(ingredient).await?;
            summary.created += 1;
        }

        tracing::info!(
            "Imported {} ingredients, skipped {}",
            summary.created,
            summary.skipped
        );

        Ok(summary)
    }
}
