//! HTTP handlers.
//!
//! Controllers extract the request, resolve the caller through `AuthGuard`, convert
//! DTOs into domain parameters, call a service and convert the result back into a
//! DTO. They hold no business rules of their own.

pub mod auth;
pub mod ingredient;
pub mod recipe;
pub mod short_link;
pub mod subscription;
pub mod user;
pub mod user_recipe;

#[cfg(test)]
mod test;

use axum::http::Uri;
use serde::Deserialize;

use crate::server::{error::AppError, model::pagination::PageRequest};

/// `page` and `limit` query parameters shared by paginated listings.
///
/// Kept as strings so malformed values map to the listing's own error rules
/// instead of a generic extractor rejection.
#[derive(Deserialize, Default)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    pub fn page_request(&self) -> Result<PageRequest, AppError> {
        PageRequest::from_query(self.page.as_deref(), self.limit.as_deref())
    }
}

/// Path and query of the request, used to derive pagination links.
pub fn request_target(uri: &Uri) -> &str {
    uri.path_and_query()
        .map(|target| target.as_str())
        .unwrap_or_else(|| uri.path())
}

/// Parses `recipes_limit`; anything but a non-negative integer means "no limit".
pub fn parse_recipes_limit(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
}
