//! Storage for uploaded images on the local filesystem.
//!
//! Files live under the configured media root and are served by the router at
//! `/media/`. Stored paths are relative (`recipes/<uuid>.png`) so the database does
//! not depend on where the media root is mounted.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::server::util::image::DecodedImage;

/// Directory for recipe images inside the media root.
pub const RECIPE_IMAGES: &str = "recipes";
/// Directory for user avatars inside the media root.
pub const AVATAR_IMAGES: &str = "avatars";

#[derive(Clone, Debug)]
pub struct MediaStorage {
    root: PathBuf,
    base_url: String,
}

impl MediaStorage {
    /// Creates a storage rooted at `root` whose files are public under
    /// `{app_url}/media/`.
    pub fn new(root: impl Into<PathBuf>, app_url: &str) -> Self {
        Self {
            root: root.into(),
            base_url: format!("{}/media", app_url.trim_end_matches('/')),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes an image under `dir` with a random file name.
    ///
    /// # Returns
    /// - `Ok(String)` - Path relative to the media root
    /// - `Err(std::io::Error)` - Directory creation or write failed
    pub async fn save(&self, dir: &str, image: &DecodedImage) -> Result<String, std::io::Error> {
        let relative = format!("{}/{}.{}", dir, Uuid::new_v4(), image.extension);

        tokio::fs::create_dir_all(self.root.join(dir)).await?;
        tokio::fs::write(self.root.join(&relative), &image.bytes).await?;

        Ok(relative)
    }

    /// Removes a stored file, logging instead of failing when it cannot be removed.
    pub async fn delete(&self, relative: &str) {
        if relative.is_empty() || relative.contains("..") {
            return;
        }

        if let Err(e) = tokio::fs::remove_file(self.root.join(relative)).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to remove media file {}: {}", relative, e);
            }
        }
    }

    /// Public URL of a stored file.
    pub fn url(&self, relative: &str) -> String {
        format!("{}/{}", self.base_url, relative)
    }
}
