use sea_orm::DatabaseConnection;

use crate::{
    model::user::CreateUserDto,
    server::{
        error::AppError,
        model::user::{RegisterUserParams, User},
        service::user::UserService,
    },
};

/// Creates an administrator account.
///
/// The fields go through the same rules as API registration.
///
/// # Returns
/// - `Ok(User)` - The created superuser
/// - `Err(AppError::ValidationErr)` - Invalid or already taken fields
pub async fn create_superuser(db: &DatabaseConnection, dto: CreateUserDto) -> Result<User, AppError> {
    let params = RegisterUserParams::from_dto(dto)?;

    UserService::new(db).create_superuser(params).await
}
