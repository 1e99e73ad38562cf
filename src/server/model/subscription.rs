//! Followed-author view used by the subscription endpoints.

use crate::{
    model::user::SubscribedUserDto,
    server::{media::MediaStorage, model::recipe::Recipe, model::user::User},
};

/// A followed author with a preview of their newest recipes.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorWithRecipes {
    pub author: User,
    /// Newest first, truncated to the requested `recipes_limit`.
    pub recipes: Vec<Recipe>,
    /// Total number of recipes by the author, independent of the truncation.
    pub recipes_count: u64,
}

impl AuthorWithRecipes {
    /// Converts to the subscription DTO. The caller follows every author listed
    /// here, so `is_subscribed` is always true.
    pub fn into_dto(self, media: &MediaStorage) -> SubscribedUserDto {
        SubscribedUserDto {
            id: self.author.id,
            avatar: self.author.avatar.as_deref().map(|path| media.url(path)),
            email: self.author.email,
            username: self.author.username,
            first_name: self.author.first_name,
            last_name: self.author.last_name,
            is_subscribed: true,
            recipes: self
                .recipes
                .into_iter()
                .map(|recipe| recipe.into_short_dto(media))
                .collect(),
            recipes_count: self.recipes_count,
        }
    }
}
