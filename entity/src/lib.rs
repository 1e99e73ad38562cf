//! SeaORM entities for the Foodgram database schema.
//!
//! Every table created by the `migration` crate has a matching module here. The
//! entities are shared by the application and the `test-utils` crate, which builds
//! in-memory SQLite schemas directly from them.

pub mod prelude;

pub mod auth_token;
pub mod favorite;
pub mod ingredient;
pub mod recipe;
pub mod recipe_ingredient;
pub mod shopping_cart;
pub mod subscription;
pub mod user;
