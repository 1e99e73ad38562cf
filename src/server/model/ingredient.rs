//! Ingredient domain model.

use serde::Deserialize;

use crate::model::ingredient::IngredientDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
}

impl Ingredient {
    pub fn from_entity(entity: entity::ingredient::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            measurement_unit: entity.measurement_unit,
        }
    }

    pub fn into_dto(self) -> IngredientDto {
        IngredientDto {
            id: self.id,
            name: self.name,
            measurement_unit: self.measurement_unit,
        }
    }
}

/// Ingredient record as found in the import file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct NewIngredient {
    pub name: String,
    pub measurement_unit: String,
}
