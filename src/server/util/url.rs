//! Absolute URL construction for pagination links.

use url::Url;

/// Builds the absolute URL of another page of the current listing.
///
/// The request path and query are resolved against `app_url`, the `page` parameter
/// is replaced and all other parameters are kept in their original order. Page 1 is
/// expressed by dropping `page` entirely.
///
/// # Arguments
/// - `app_url` - Public base URL such as `https://foodgram.example`
/// - `path_and_query` - Original request target, e.g. `/api/recipes/?page=2&limit=6`
/// - `page` - Target page number (1-based)
///
/// # Returns
/// - `Some(String)` - Absolute URL of the target page
/// - `None` - The base URL and path could not be combined
pub fn page_url(app_url: &str, path_and_query: &str, page: u64) -> Option<String> {
    let mut url = Url::parse(app_url).ok()?.join(path_and_query).ok()?;

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "page")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.set_query(None);
    if !pairs.is_empty() || page > 1 {
        let mut query = url.query_pairs_mut();
        for (key, value) in &pairs {
            query.append_pair(key, value);
        }
        if page > 1 {
            query.append_pair("page", &page.to_string());
        }
    }

    Some(url.to_string())
}
