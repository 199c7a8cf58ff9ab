use serde::Deserialize;

/// Base URL of the reference catalogue
pub const DEFAULT_BASE_URL: &str = "https://books.toscrape.com/catalogue/";

/// Catalogue page file name; `{}` is replaced by the page number
pub const DEFAULT_PAGE_PATTERN: &str = "page-{}.html";

/// Main configuration structure for Catalogue-Bench
///
/// Every section is optional; the defaults describe the reference catalogue
/// (50 pages of 20 items each) and an 8-worker multi mode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub catalogue: CatalogueConfig,
    pub workers: WorkerConfig,
    pub http: HttpConfig,
}

/// Where the catalogue lives and how many pages it has
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogueConfig {
    /// Base URL used for page URLs and for resolving relative item links
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Page file name pattern, relative to `base_url`
    #[serde(rename = "page-pattern")]
    pub page_pattern: String,

    /// Number of catalogue pages to seed
    pub pages: u32,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_pattern: DEFAULT_PAGE_PATTERN.to_string(),
            pages: 50,
        }
    }
}

/// Worker pool configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// Number of workers in multi mode
    pub count: usize,

    /// What a worker does after a list page yields no items
    #[serde(rename = "on-empty-page")]
    pub on_empty_page: EmptyPagePolicy,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            count: 8,
            on_empty_page: EmptyPagePolicy::Stop,
        }
    }
}

/// Behavior of a worker when a list page yields zero items
///
/// A failed list-page fetch counts as zero items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyPagePolicy {
    /// Treat the empty page as the end of the catalogue and end the pull loop
    #[default]
    Stop,

    /// Ignore the empty page and pull the next job
    Skip,
}

/// HTTP session configuration, shared by every worker's fetcher
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Timeout applied to every individual request (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("catalogue-bench/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_secs: 100,
            connect_timeout_secs: 10,
        }
    }
}
