//! Recipe domain models, write parameters and their validation.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::{
    model::recipe::{RecipeDto, RecipeIngredientDto, RecipeShortDto, RecipeWriteDto},
    server::{
        error::validation::ValidationError,
        media::MediaStorage,
        model::user::UserProfile,
        util::image::{decode_data_url, DecodedImage},
    },
};

pub const NAME_MAX_LEN: usize = 256;
pub const MIN_COOKING_TIME: i64 = 1;
pub const MAX_COOKING_TIME: i64 = 32_000;
pub const MIN_AMOUNT: i64 = 1;
pub const MAX_AMOUNT: i64 = 32_000;

const REQUIRED: &str = "This field is required.";
const BLANK: &str = "This field may not be blank.";

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: i32,
    pub author_id: i32,
    pub name: String,
    /// Image path relative to the media root.
    pub image: String,
    pub text: String,
    pub cooking_time: i32,
    pub short_link: String,
    pub pub_date: DateTime<Utc>,
}

impl Recipe {
    pub fn from_entity(entity: entity::recipe::Model) -> Self {
        Self {
            id: entity.id,
            author_id: entity.author_id,
            name: entity.name,
            image: entity.image,
            text: entity.text,
            cooking_time: entity.cooking_time,
            short_link: entity.short_link,
            pub_date: entity.pub_date,
        }
    }

    /// Converts the recipe to the compact form used by lists of saved recipes.
    pub fn into_short_dto(self, media: &MediaStorage) -> RecipeShortDto {
        RecipeShortDto {
            id: self.id,
            image: media.url(&self.image),
            name: self.name,
            cooking_time: self.cooking_time,
        }
    }
}

/// Ingredient line of a recipe joined with the ingredient's name and unit.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeIngredient {
    pub ingredient_id: i32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

impl RecipeIngredient {
    pub fn into_dto(self) -> RecipeIngredientDto {
        RecipeIngredientDto {
            id: self.ingredient_id,
            name: self.name,
            measurement_unit: self.measurement_unit,
            amount: self.amount,
        }
    }
}

/// Recipe with everything the detail view shows to a particular caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetail {
    pub recipe: Recipe,
    pub author: UserProfile,
    pub ingredients: Vec<RecipeIngredient>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
}

impl RecipeDetail {
    pub fn into_dto(self, media: &MediaStorage) -> RecipeDto {
        RecipeDto {
            id: self.recipe.id,
            author: self.author.into_dto(media),
            ingredients: self
                .ingredients
                .into_iter()
                .map(RecipeIngredient::into_dto)
                .collect(),
            is_favorited: self.is_favorited,
            is_in_shopping_cart: self.is_in_shopping_cart,
            image: media.url(&self.recipe.image),
            name: self.recipe.name,
            text: self.recipe.text,
            cooking_time: self.recipe.cooking_time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngredientAmount {
    pub ingredient_id: i32,
    pub amount: i32,
}

/// Whether a write payload creates a recipe or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WriteMode {
    /// Every field is required.
    Create,
    /// Only `ingredients` is required; absent fields keep their value.
    Update,
}

/// Validated recipe payload. The image is already decoded but not yet stored.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeInput {
    pub ingredients: Vec<IngredientAmount>,
    pub image: Option<DecodedImage>,
    pub name: Option<String>,
    pub text: Option<String>,
    pub cooking_time: Option<i32>,
}

impl RecipeInput {
    /// Validates a recipe payload.
    ///
    /// Checks presence according to `mode`, lengths and numeric ranges, ingredient
    /// uniqueness and the image encoding. Whether the referenced ingredients exist
    /// is checked by the service against the database.
    ///
    /// # Returns
    /// - `Ok(RecipeInput)` - Payload is well formed
    /// - `Err(ValidationError)` - Every failing field with its messages
    pub fn from_dto(dto: RecipeWriteDto, mode: WriteMode) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();
        let required = mode == WriteMode::Create;

        let ingredients = match dto.ingredients {
            None => {
                errors.add("ingredients", REQUIRED);
                Vec::new()
            }
            Some(items) => validate_ingredients(&mut errors, items),
        };

        let name = match dto.name.map(|n| n.trim().to_string()) {
            None => {
                if required {
                    errors.add("name", REQUIRED);
                }
                None
            }
            Some(name) if name.is_empty() => {
                errors.add("name", BLANK);
                None
            }
            Some(name) if name.chars().count() > NAME_MAX_LEN => {
                errors.add(
                    "name",
                    format!(
                        "Ensure this field has no more than {} characters.",
                        NAME_MAX_LEN
                    ),
                );
                None
            }
            Some(name) => Some(name),
        };

        let text = match dto.text {
            None => {
                if required {
                    errors.add("text", REQUIRED);
                }
                None
            }
            Some(text) if text.trim().is_empty() => {
                errors.add("text", BLANK);
                None
            }
            Some(text) => Some(text),
        };

        let cooking_time = match dto.cooking_time {
            None => {
                if required {
                    errors.add("cooking_time", REQUIRED);
                }
                None
            }
            Some(minutes) if !(MIN_COOKING_TIME..=MAX_COOKING_TIME).contains(&minutes) => {
                errors.add(
                    "cooking_time",
                    format!(
                        "Cooking time must be between {} and {} minutes.",
                        MIN_COOKING_TIME, MAX_COOKING_TIME
                    ),
                );
                None
            }
            Some(minutes) => i32::try_from(minutes).ok(),
        };

        let image = match dto.image {
            None => {
                if required {
                    errors.add("image", REQUIRED);
                }
                None
            }
            Some(image) if image.trim().is_empty() => {
                errors.add("image", BLANK);
                None
            }
            Some(image) => match decode_data_url(image.trim()) {
                Ok(decoded) => Some(decoded),
                Err(message) => {
                    errors.add("image", message);
                    None
                }
            },
        };

        errors.into_result()?;

        Ok(Self {
            ingredients,
            image,
            name,
            text,
            cooking_time,
        })
    }

    /// Distinct ingredient IDs referenced by the payload.
    pub fn ingredient_ids(&self) -> Vec<i32> {
        self.ingredients.iter().map(|i| i.ingredient_id).collect()
    }
}

fn validate_ingredients(
    errors: &mut ValidationError,
    items: Vec<crate::model::recipe::IngredientAmountDto>,
) -> Vec<IngredientAmount> {
    if items.is_empty() {
        errors.add("ingredients", "Add at least one ingredient.");
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(items.len());

    for item in items {
        if !seen.insert(item.id) {
            errors.add(
                "ingredients",
                format!("Ingredient {} is listed more than once.", item.id),
            );
            continue;
        }

        if !(MIN_AMOUNT..=MAX_AMOUNT).contains(&item.amount) {
            errors.add(
                "ingredients",
                format!(
                    "Amount of ingredient {} must be between {} and {}.",
                    item.id, MIN_AMOUNT, MAX_AMOUNT
                ),
            );
            continue;
        }

        result.push(IngredientAmount {
            ingredient_id: item.id,
            amount: item.amount as i32,
        });
    }

    result
}

/// Row values for a new recipe, with the image already stored.
#[derive(Debug, Clone)]
pub struct CreateRecipeParams {
    pub author_id: i32,
    pub name: String,
    pub image: String,
    pub text: String,
    pub cooking_time: i32,
    pub short_link: String,
    pub ingredients: Vec<IngredientAmount>,
}

/// Changes to an existing recipe. `None` keeps the stored value; the ingredient
/// set is always replaced.
#[derive(Debug, Clone)]
pub struct UpdateRecipeParams {
    pub id: i32,
    pub name: Option<String>,
    pub image: Option<String>,
    pub text: Option<String>,
    pub cooking_time: Option<i32>,
    pub ingredients: Vec<IngredientAmount>,
}

/// Restrictions applied to the recipe listing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecipeFilter {
    pub author_id: Option<i32>,
    /// Only recipes favorited by this user.
    pub favorited_by: Option<i32>,
    /// Only recipes in this user's shopping cart.
    pub in_cart_of: Option<i32>,
}

/// One aggregated line of the downloadable shopping list.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListItem {
    pub name: String,
    pub measurement_unit: String,
    pub total: i64,
}

pub const SHOPPING_LIST_HEADER: &str = "Shopping list:";

/// Renders the shopping list as plain text: a header, a blank line, then one
/// `<name> - <total> <unit>` line per item.
pub fn render_shopping_list(items: &[ShoppingListItem]) -> String {
    let mut text = format!("{}\n\n", SHOPPING_LIST_HEADER);
    for item in items {
        text.push_str(&format!(
            "{} - {} {}\n",
            item.name, item.total, item.measurement_unit
        ));
    }
    text
}
