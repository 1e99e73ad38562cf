pub use super::auth_token::Entity as AuthToken;
pub use super::favorite::Entity as Favorite;
pub use super::ingredient::Entity as Ingredient;
pub use super::recipe::Entity as Recipe;
pub use super::recipe_ingredient::Entity as RecipeIngredient;
pub use super::shopping_cart::Entity as ShoppingCart;
pub use super::subscription::Entity as Subscription;
pub use super::user::Entity as User;
