use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with a chosen set of tables.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Ingredient, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Ingredient)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order by `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a builder with no tables.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test schema.
    ///
    /// The statement is generated for the SQLite backend, including the foreign keys
    /// declared by the entity's `belongs_to` relations. Tables with foreign keys must
    /// be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and token tables used by authentication tests.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User).with_table(AuthToken)
    }

    /// Adds every Foodgram table in dependency order.
    ///
    /// Covers users, tokens, subscriptions, ingredients, recipes with their
    /// ingredient rows, favorites and shopping carts.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_foodgram_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Subscription)
            .with_table(Ingredient)
            .with_table(Recipe)
            .with_table(RecipeIngredient)
            .with_table(Favorite)
            .with_table(ShoppingCart)
    }

    /// Opens the in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with all tables created
    /// - `Err(TestError::Database)` - Failed to connect or create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
