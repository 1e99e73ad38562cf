mod ingredient;
mod recipe;
mod subscription;
mod token;
mod user;
mod user_recipe;
