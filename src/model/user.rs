use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::recipe::RecipeShortDto;

/// Public profile of a user as seen by the caller.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Whether the caller follows this user; always false for anonymous callers.
    pub is_subscribed: bool,
    /// Absolute avatar URL.
    pub avatar: Option<String>,
}

/// Registration payload. Fields are optional so that missing ones are reported
/// as field errors instead of a deserialization failure.
#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct CreateUserDto {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreatedUserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SetPasswordDto {
    #[serde(default)]
    pub current_password: Option<String>,
    #[serde(default)]
    pub new_password: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SetAvatarDto {
    /// Image encoded as `data:image/<ext>;base64,<payload>`.
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AvatarDto {
    pub avatar: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedUsersDto {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<UserDto>,
}

/// A followed author together with a preview of their recipes.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SubscribedUserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
    pub avatar: Option<String>,
    pub recipes: Vec<RecipeShortDto>,
    pub recipes_count: u64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedSubscriptionsDto {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<SubscribedUserDto>,
}
