//! Page-number pagination shared by the user, recipe and subscription listings.

use crate::server::{error::AppError, util::url::page_url};

/// Page size used when the request does not pass `limit`.
pub const DEFAULT_PAGE_SIZE: u64 = 6;
/// Largest accepted `limit`.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Requested page, 1-based.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    /// Builds a page request from optional `page` and `limit` query values.
    ///
    /// A missing or zero `limit` falls back to the default page size and values above
    /// the maximum are clamped.
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Normalized request
    /// - `Err(AppError::NotFound)` - `page` is 0
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Result<Self, AppError> {
        let page = page.unwrap_or(1);
        if page == 0 {
            return Err(AppError::NotFound("Invalid page.".to_string()));
        }

        let per_page = match limit {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(limit) => limit.min(MAX_PAGE_SIZE),
        };

        Ok(Self { page, per_page })
    }

    /// Builds a page request from raw query string values.
    ///
    /// A `page` that is not a positive integer is a 404; an unparsable `limit` is
    /// ignored in favor of the default size.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Result<Self, AppError> {
        let page = match page {
            None => None,
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| AppError::NotFound("Invalid page.".to_string()))?,
            ),
        };
        let limit = limit.and_then(|raw| raw.trim().parse::<u64>().ok());

        Self::new(page, limit)
    }

    /// Zero-based page index as used by SeaORM's paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }

    /// Rejects pages past the end of a listing with `total` items.
    ///
    /// The first page is always valid, even for an empty listing.
    pub fn ensure_in_range(&self, total: u64) -> Result<(), AppError> {
        if self.page > 1 && self.index().saturating_mul(self.per_page) >= total {
            return Err(AppError::NotFound("Invalid page.".to_string()));
        }

        Ok(())
    }
}

/// One page of a listing with the total item count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            per_page: request.per_page,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_mul(self.per_page) < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Absolute `next` / `previous` links for this page.
    ///
    /// # Arguments
    /// - `app_url` - Public base URL of the API
    /// - `path_and_query` - Original request target the links are derived from
    pub fn links(&self, app_url: &str, path_and_query: &str) -> (Option<String>, Option<String>) {
        let next = if self.has_next() {
            page_url(app_url, path_and_query, self.page + 1)
        } else {
            None
        };
        let previous = if self.has_previous() {
            page_url(app_url, path_and_query, self.page - 1)
        } else {
            None
        };

        (next, previous)
    }
}
