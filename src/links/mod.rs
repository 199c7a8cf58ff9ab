//! Link handling for the catalogue
//!
//! This module builds catalogue page URLs from the configured pattern and
//! resolves the relative item links found on list pages.

use crate::config::CatalogueConfig;
use url::Url;

/// Parses the catalogue base URL
pub fn catalogue_base(config: &CatalogueConfig) -> Result<Url, url::ParseError> {
    Url::parse(&config.base_url)
}

/// Builds the absolute URL of catalogue page `page`
///
/// # Example
///
/// ```
/// use catalogue_bench::links::page_url;
/// use url::Url;
///
/// let base = Url::parse("https://books.toscrape.com/catalogue/").unwrap();
/// let url = page_url(&base, "page-{}.html", 7).unwrap();
/// assert_eq!(url.as_str(), "https://books.toscrape.com/catalogue/page-7.html");
/// ```
pub fn page_url(base: &Url, pattern: &str, page: u32) -> Result<Url, url::ParseError> {
    base.join(&pattern.replace("{}", &page.to_string()))
}

/// Builds the URLs of catalogue pages `1..=config.pages`, in order
pub fn page_urls(config: &CatalogueConfig) -> Result<Vec<Url>, url::ParseError> {
    let base = catalogue_base(config)?;
    (1..=config.pages)
        .map(|page| page_url(&base, &config.page_pattern, page))
        .collect()
}

/// Resolves an item link href to an absolute URL
///
/// Returns None if the link should be skipped:
/// - empty or fragment-only hrefs
/// - `javascript:`, `mailto:`, `tel:` and `data:` schemes
/// - hrefs that do not resolve to an http(s) URL
pub fn resolve_link(href: &str, base: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    let absolute = base.join(href).ok()?;
    match absolute.scheme() {
        "http" | "https" => Some(absolute.to_string()),
        _ => None,
    }
}
