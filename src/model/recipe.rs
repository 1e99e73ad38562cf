use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use utoipa::ToSchema;

use crate::model::user::UserDto;

/// Ingredient line of a recipe with its amount.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RecipeIngredientDto {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RecipeDto {
    pub id: i32,
    pub author: UserDto,
    pub ingredients: Vec<RecipeIngredientDto>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub name: String,
    /// Absolute image URL.
    pub image: String,
    pub text: String,
    pub cooking_time: i32,
}

/// Compact recipe form used by favorites, the shopping cart and subscriptions.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RecipeShortDto {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub cooking_time: i32,
}

/// Numbers are also accepted as numeric strings, e.g. `"10"`.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct IngredientAmountDto {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: i32,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub amount: i64,
}

/// Payload for creating (POST) or editing (PATCH) a recipe.
///
/// On create every field is required. On edit only `ingredients` is required.
#[serde_as]
#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct RecipeWriteDto {
    #[serde(default)]
    pub ingredients: Option<Vec<IngredientAmountDto>>,
    /// Image encoded as `data:image/<ext>;base64,<payload>`.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub cooking_time: Option<i64>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedRecipesDto {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<RecipeDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ShortLinkDto {
    #[serde(rename = "short-link")]
    pub short_link: String,
}
