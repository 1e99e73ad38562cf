//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Media storage for uploaded recipe images and avatars
//! - Application URL for generating absolute links

use sea_orm::DatabaseConnection;

use crate::server::media::MediaStorage;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool, and the rest are small owned values.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Storage for uploaded images, served under `/media/`.
    pub media: MediaStorage,

    /// Application base URL without a trailing slash.
    ///
    /// Used to build pagination links and short links.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `media` - Media storage rooted at the configured media directory
    /// - `app_url` - Application base URL
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, media: MediaStorage, app_url: String) -> Self {
        Self { db, media, app_url }
    }
}
