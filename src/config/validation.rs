use crate::config::types::{BenchConfig, CatalogueConfig, HttpConfig, WorkerConfig};
use crate::ConfigError;
use url::Url;

/// Upper bound on the number of worker threads
pub const MAX_WORKERS: usize = 256;

/// Validates the entire configuration
pub fn validate(config: &BenchConfig) -> Result<(), ConfigError> {
    validate_catalogue_config(&config.catalogue)?;
    validate_worker_config(&config.workers)?;
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates catalogue location and size
fn validate_catalogue_config(config: &CatalogueConfig) -> Result<(), ConfigError> {
    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", config.base_url, e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' must use http or https",
            config.base_url
        )));
    }

    // Relative links only resolve into the catalogue directory with a trailing slash
    if !base.path().ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "base-url '{}' must end with '/'",
            config.base_url
        )));
    }

    if !config.page_pattern.contains("{}") {
        return Err(ConfigError::Validation(format!(
            "page-pattern must contain '{{}}' as the page number placeholder, got '{}'",
            config.page_pattern
        )));
    }

    if config.pages < 1 {
        return Err(ConfigError::Validation(format!(
            "pages must be >= 1, got {}",
            config.pages
        )));
    }

    Ok(())
}

/// Validates worker pool settings
fn validate_worker_config(config: &WorkerConfig) -> Result<(), ConfigError> {
    if config.count < 1 || config.count > MAX_WORKERS {
        return Err(ConfigError::Validation(format!(
            "workers.count must be between 1 and {}, got {}",
            MAX_WORKERS, config.count
        )));
    }

    Ok(())
}

/// Validates HTTP session settings
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    Ok(())
}
