use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment holding the in-memory SQLite connection.
///
/// The connection is opened lazily on first use and lives as long as the context,
/// so every table created through it stays visible to the test body.
pub struct TestContext {
    /// Connection to the in-memory database, `None` until `database()` is called.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a context without an open connection.
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Gets or opens the in-memory SQLite connection.
    ///
    /// SQLite in-memory databases are private to a single connection; SeaORM limits
    /// the SQLite pool to one connection, so every query sees the same schema.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the open connection
    /// - `Err(TestError::Database)` - Failed to open the database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Executes the given CREATE TABLE statements in order.
    ///
    /// # Arguments
    /// - `stmts` - Statements generated by `TestBuilder`
    ///
    /// # Returns
    /// - `Ok(())` - All tables created
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(db.get_database_backend().build(&stmt)).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
