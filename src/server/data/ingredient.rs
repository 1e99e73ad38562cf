//! Ingredient repository.

use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::ingredient::{Ingredient, NewIngredient};

pub struct IngredientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IngredientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists ingredients ordered by name, optionally filtered by name prefix.
    ///
    /// The prefix match is case-insensitive; `%` and `_` in the prefix match
    /// literally.
    ///
    /// # Arguments
    /// - `prefix` - Start of the ingredient name, `None` for all ingredients
    ///
    /// # Returns
    /// - `Ok(Vec<Ingredient>)` - Matching ingredients
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, prefix: Option<&str>) -> Result<Vec<Ingredient>, DbErr> {
        let mut query = entity::prelude::Ingredient::find();

        if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
            let pattern = format!("{}%", escape_like(&prefix.to_lowercase()));
            query = query.filter(
                Expr::expr(Func::lower(Expr::col((
                    entity::ingredient::Entity,
                    entity::ingredient::Column::Name,
                ))))
                .like(LikeExpr::new(pattern).escape('\\')),
            );
        }

        let entities = query
            .order_by_asc(entity::ingredient::Column::Name)
            .order_by_asc(entity::ingredient::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ingredient::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Ingredient>, DbErr> {
        let entity = entity::prelude::Ingredient::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Ingredient::from_entity))
    }

    /// Gets the ingredients with the given IDs; unknown IDs are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Ingredient>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ingredient::from_entity).collect())
    }

    /// Checks for an ingredient with exactly this name and unit.
    pub async fn exists(&self, name: &str, measurement_unit: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::Name.eq(name))
            .filter(entity::ingredient::Column::MeasurementUnit.eq(measurement_unit))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, ingredient: NewIngredient) -> Result<Ingredient, DbErr> {
        let entity = entity::ingredient::ActiveModel {
            name: ActiveValue::Set(ingredient.name),
            measurement_unit: ActiveValue::Set(ingredient.measurement_unit),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Ingredient::from_entity(entity))
    }
}

/// Escapes LIKE wildcards with `\`.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
