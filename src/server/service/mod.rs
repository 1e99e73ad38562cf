//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ownership checks, uniqueness rules and list membership
//! - **Orchestration**: Coordinating repository calls with media storage
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod ingredient;
pub mod recipe;
pub mod subscription;
pub mod user;
pub mod user_recipe;
