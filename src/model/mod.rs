//! Request and response DTOs shared by the HTTP layer and the OpenAPI document.

pub mod api;
pub mod auth;
pub mod ingredient;
pub mod recipe;
pub mod user;
