//! Foodgram Test Utils
//!
//! Shared helpers for the backend's database tests. Tests describe the tables they
//! need through `TestBuilder`, receive a `TestContext` backed by an in-memory SQLite
//! database, and populate it with the `factory` builders.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_recipes() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_foodgram_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let author = factory::create_user(db).await?;
//!     let recipe = factory::create_recipe(db, author.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
