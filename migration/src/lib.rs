pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_users_table;
mod m20260105_000002_create_auth_token_table;
mod m20260105_000003_create_subscription_table;
mod m20260106_000004_create_ingredient_table;
mod m20260106_000005_create_recipe_table;
mod m20260106_000006_create_recipe_ingredient_table;
mod m20260107_000007_create_favorite_table;
mod m20260107_000008_create_shopping_cart_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_users_table::Migration),
            Box::new(m20260105_000002_create_auth_token_table::Migration),
            Box::new(m20260105_000003_create_subscription_table::Migration),
            Box::new(m20260106_000004_create_ingredient_table::Migration),
            Box::new(m20260106_000005_create_recipe_table::Migration),
            Box::new(m20260106_000006_create_recipe_ingredient_table::Migration),
            Box::new(m20260107_000007_create_favorite_table::Migration),
            Box::new(m20260107_000008_create_shopping_cart_table::Migration),
        ]
    }
}
