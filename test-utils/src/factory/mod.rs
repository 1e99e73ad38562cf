//! Factory methods for creating test data.
//!
//! Each table has a `Factory` builder for customised rows and a `create_*` shortcut
//! that inserts a row with defaults. Defaults are derived from a shared counter so
//! rows created in the same test never collide on unique columns.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let author = factory::create_user(db).await?;
//! let flour = factory::ingredient::IngredientFactory::new(db)
//!     .name("flour")
//!     .measurement_unit("g")
//!     .build()
//!     .await?;
//! let recipe = factory::create_recipe(db, author.id).await?;
//! factory::add_recipe_ingredient(db, recipe.id, flour.id, 200).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users and auth tokens
//! - `ingredient` - Ingredients
//! - `recipe` - Recipes and their ingredient rows
//! - `relation` - Subscriptions, favorites and shopping cart entries
//! - `helpers` - Counter and combined setups

pub mod helpers;
pub mod ingredient;
pub mod recipe;
pub mod relation;
pub mod user;

pub use ingredient::create_ingredient;
pub use recipe::{add_recipe_ingredient, create_recipe};
pub use relation::{add_favorite, add_to_shopping_cart, create_subscription};
pub use user::{create_token, create_user};
