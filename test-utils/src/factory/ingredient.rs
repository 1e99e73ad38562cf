//! Ingredient factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating ingredients.
pub struct IngredientFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    measurement_unit: String,
}

impl<'a> IngredientFactory<'a> {
    /// Creates a factory named `"ingredient {id}"` measured in grams.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("ingredient {}", id),
            measurement_unit: "g".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn measurement_unit(mut self, unit: impl Into<String>) -> Self {
        self.measurement_unit = unit.into();
        self
    }

    pub async fn build(self) -> Result<entity::ingredient::Model, DbErr> {
        entity::ingredient::ActiveModel {
            name: ActiveValue::Set(self.name),
            measurement_unit: ActiveValue::Set(self.measurement_unit),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an ingredient with default values.
pub async fn create_ingredient(db: &DatabaseConnection) -> Result<entity::ingredient::Model, DbErr> {
    IngredientFactory::new(db).build().await
}
