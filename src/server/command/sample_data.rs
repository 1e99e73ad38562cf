//! Sample users and recipes for local development.

use std::io::Cursor;

use image::{ImageError, ImageFormat, Rgb, RgbImage};
use rand::{seq::IndexedRandom, Rng};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::ingredient::IngredientRepository,
    error::AppError,
    media::MediaStorage,
    model::{
        ingredient::{Ingredient, NewIngredient},
        recipe::{IngredientAmount, RecipeInput},
        user::RegisterUserParams,
    },
    service::{ingredient::IngredientService, recipe::RecipeService, user::UserService},
    util::{image::DecodedImage, random::alphanumeric},
};

pub const USER_COUNT: usize = 5;
pub const RECIPES_PER_USER: usize = 10;
/// Password shared by every sample account.
pub const SAMPLE_PASSWORD: &str = "sample123";

const IMAGE_SIZE: u32 = 120;

const INGREDIENTS: &[(&str, &str)] = &[
    ("wheat flour", "g"),
    ("granulated sugar", "g"),
    ("table salt", "tsp"),
    ("black pepper", "tsp"),
    ("chicken eggs", "pcs"),
    ("whole milk", "ml"),
    ("sunflower oil", "tbsp"),
    ("onion", "pcs"),
    ("fresh garlic", "cloves"),
    ("red tomatoes", "pcs"),
    ("ground beef", "g"),
    ("butter", "g"),
    ("fresh parsley", "g"),
    ("lemon juice", "ml"),
    ("olive oil", "ml"),
    ("carrot", "pcs"),
    ("potato", "pcs"),
    ("sour cream", "g"),
    ("table vinegar", "ml"),
    ("white rice", "g"),
];

const FIRST_NAMES: &[&str] = &["Anna", "Boris", "Clara", "Dmitri", "Elena", "Felix", "Greta", "Hugo"];
const LAST_NAMES: &[&str] = &["Ivanova", "Novak", "Keller", "Moreau", "Larsen", "Rossi", "Berg", "Silva"];
const ADJECTIVES: &[&str] = &["Rustic", "Quick", "Spicy", "Golden", "Creamy", "Crispy", "Smoky", "Fresh"];
const DISHES: &[&str] = &["soup", "pie", "stew", "salad", "risotto", "pancakes", "casserole", "omelette"];
const STYLES: &[&str] = &["grandma's way", "for two", "with herbs", "in a hurry", "for the weekend"];
const STEPS: &[&str] = &[
    "Prepare and measure all the ingredients.",
    "Heat the pan over a medium flame.",
    "Stir gently and season to taste.",
    "Let it rest for a few minutes before serving.",
    "Serve warm with fresh bread.",
];

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SampleSummary {
    pub users: usize,
    pub recipes: usize,
    pub ingredients_created: usize,
}

/// Creates sample users, each with a set of recipes built from a fixed ingredient
/// list. Ingredients already present are reused.
pub async fn load_sample_data(
    db: &DatabaseConnection,
    media: &MediaStorage,
) -> Result<SampleSummary, AppError> {
    let import = IngredientService::new(db)
        .import(
            INGREDIENTS
                .iter()
                .map(|(name, unit)| NewIngredient {
                    name: name.to_string(),
                    measurement_unit: unit.to_string(),
                })
                .collect(),
        )
        .await?;

    let names: Vec<&str> = INGREDIENTS.iter().map(|(name, _)| *name).collect();
    let available: Vec<Ingredient> = IngredientRepository::new(db)
        .search(None)
        .await?
        .into_iter()
        .filter(|ingredient| names.contains(&ingredient.name.as_str()))
        .collect();

    let mut summary = SampleSummary {
        ingredients_created: import.created,
        ..Default::default()
    };

    let users = UserService::new(db);
    let recipes = RecipeService::new(db, media);

    for _ in 0..USER_COUNT {
        let user = users.register(sample_user()).await?;
        summary.users += 1;
        tracing::info!("Added sample user {}", user.email);

        for _ in 0..RECIPES_PER_USER {
            let recipe = recipes.create(user.id, sample_recipe(&available)?).await?;
            summary.recipes += 1;
            tracing::debug!("Added sample recipe {} by {}", recipe.recipe.name, user.email);
        }
    }

    tracing::info!(
        "Sample data loaded: {} users, {} recipes",
        summary.users,
        summary.recipes
    );

    Ok(summary)
}

fn pick<'a>(rng: &mut impl Rng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn sample_user() -> RegisterUserParams {
    let mut rng = rand::rng();
    let first_name = pick(&mut rng, FIRST_NAMES);
    let last_name = pick(&mut rng, LAST_NAMES);
    let suffix = alphanumeric(6).to_lowercase();
    let username = format!("{}_{}", first_name.to_lowercase(), suffix);

    RegisterUserParams {
        email: format!("{}@example.com", username),
        username,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        password: SAMPLE_PASSWORD.to_string(),
    }
}

fn sample_recipe(available: &[Ingredient]) -> Result<RecipeInput, AppError> {
    let mut rng = rand::rng();

    let count = rng.random_range(3..6).min(available.len());
    let chosen: Vec<&Ingredient> = available.choose_multiple(&mut rng, count).collect();
    let ingredients = chosen
        .into_iter()
        .map(|ingredient| IngredientAmount {
            ingredient_id: ingredient.id,
            amount: rng.random_range(50..1000),
        })
        .collect();

    let name = format!(
        "{} {} {}",
        pick(&mut rng, ADJECTIVES),
        pick(&mut rng, DISHES),
        pick(&mut rng, STYLES)
    );
    let text = STEPS
        .choose_multiple(&mut rng, 3)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    let bytes = solid_jpeg(IMAGE_SIZE, [rng.random(), rng.random(), rng.random()])?;

    Ok(RecipeInput {
        ingredients,
        image: Some(DecodedImage {
            extension: "jpg".to_string(),
            bytes,
        }),
        name: Some(name),
        text: Some(text),
        cooking_time: Some(rng.random_range(5..125)),
    })
}

/// Encodes a single-colour JPEG.
fn solid_jpeg(size: u32, color: [u8; 3]) -> Result<Vec<u8>, ImageError> {
    let mut out = Cursor::new(Vec::new());
    RgbImage::from_pixel(size, size, Rgb(color)).write_to(&mut out, ImageFormat::Jpeg)?;

    Ok(out.into_inner())
}
