//! User domain models, parameters and registration rules.

use crate::{
    model::user::{CreateUserDto, CreatedUserDto, UserDto},
    server::{error::validation::ValidationError, media::MediaStorage},
};

pub const EMAIL_MAX_LEN: usize = 254;
pub const NAME_MAX_LEN: usize = 150;
pub const PASSWORD_MIN_LEN: usize = 8;
/// Usernames that collide with the `/api/users/me/` route.
pub const RESERVED_USERNAMES: &[&str] = &["me"];

const REQUIRED: &str = "This field is required.";
const BLANK: &str = "This field may not be blank.";

/// Registered user without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Avatar path relative to the media root.
    pub avatar: Option<String>,
    pub is_superuser: bool,
}

impl User {
    /// Converts an entity model to a user domain model, dropping the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            username: entity.username,
            first_name: entity.first_name,
            last_name: entity.last_name,
            avatar: entity.avatar,
            is_superuser: entity.is_superuser,
        }
    }

    /// Converts the user to the public profile DTO.
    ///
    /// # Arguments
    /// - `is_subscribed` - Whether the caller follows this user
    /// - `media` - Storage used to resolve the avatar URL
    pub fn into_dto(self, is_subscribed: bool, media: &MediaStorage) -> UserDto {
        UserDto {
            id: self.id,
            avatar: self.avatar.as_deref().map(|path| media.url(path)),
            email: self.email,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            is_subscribed,
        }
    }

    /// Converts the user to the registration response, which omits the avatar.
    pub fn into_created_dto(self) -> CreatedUserDto {
        CreatedUserDto {
            id: self.id,
            email: self.email,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

/// A user as seen by a particular caller.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user: User,
    /// Whether the caller follows this user.
    pub is_subscribed: bool,
}

impl UserProfile {
    pub fn into_dto(self, media: &MediaStorage) -> UserDto {
        self.user.into_dto(self.is_subscribed, media)
    }
}

/// Validated registration input with a plaintext password.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl RegisterUserParams {
    /// Validates the registration payload field by field.
    ///
    /// Uniqueness of email and username is checked later against the database.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParams)` - All fields present and well formed
    /// - `Err(ValidationError)` - Every failing field with its messages
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        let email = required(&mut errors, "email", dto.email);
        let username = required(&mut errors, "username", dto.username);
        let first_name = required(&mut errors, "first_name", dto.first_name);
        let last_name = required(&mut errors, "last_name", dto.last_name);
        let password = dto.password.unwrap_or_default();

        if let Some(email) = &email {
            if email.chars().count() > EMAIL_MAX_LEN {
                errors.add("email", max_len_message(EMAIL_MAX_LEN));
            }
            if !is_valid_email(email) {
                errors.add("email", "Enter a valid email address.");
            }
        }

        if let Some(username) = &username {
            if username.chars().count() > NAME_MAX_LEN {
                errors.add("username", max_len_message(NAME_MAX_LEN));
            }
            if !is_valid_username(username) {
                errors.add(
                    "username",
                    "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
                );
            }
            if RESERVED_USERNAMES.contains(&username.to_lowercase().as_str()) {
                errors.add("username", format!("Username '{}' is reserved.", username));
            }
        }

        for (field, value) in [("first_name", &first_name), ("last_name", &last_name)] {
            if let Some(value) = value {
                if value.chars().count() > NAME_MAX_LEN {
                    errors.add(field, max_len_message(NAME_MAX_LEN));
                }
            }
        }

        for message in password_problems(&password) {
            errors.add("password", message);
        }

        errors.into_result()?;

        Ok(Self {
            email: email.unwrap_or_default(),
            username: username.unwrap_or_default(),
            first_name: first_name.unwrap_or_default(),
            last_name: last_name.unwrap_or_default(),
            password,
        })
    }
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_superuser: bool,
}

/// Returns every rule the password breaks; empty when it is acceptable.
pub fn password_problems(password: &str) -> Vec<String> {
    if password.is_empty() {
        return vec![REQUIRED.to_string()];
    }

    let mut problems = Vec::new();
    if password.chars().count() < PASSWORD_MIN_LEN {
        problems.push(format!(
            "This password is too short. It must contain at least {} characters.",
            PASSWORD_MIN_LEN
        ));
    }
    if password.chars().all(|c| c.is_ascii_digit()) {
        problems.push("This password is entirely numeric.".to_string());
    }

    problems
}

fn required(errors: &mut ValidationError, field: &str, value: Option<String>) -> Option<String> {
    match value.map(|v| v.trim().to_string()) {
        None => {
            errors.add(field, REQUIRED);
            None
        }
        Some(v) if v.is_empty() => {
            errors.add(field, BLANK);
            None
        }
        Some(v) => Some(v),
    }
}

fn max_len_message(max: usize) -> String {
    format!("Ensure this field has no more than {} characters.", max)
}

/// Loose email shape check: one `@`, non-empty local part, dotted domain.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

/// Letters, digits and `@ . + - _`.
fn is_valid_username(username: &str) -> bool {
    username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
}
