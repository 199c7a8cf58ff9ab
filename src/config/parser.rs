use crate::config::types::BenchConfig;
use crate::config::validation::validate;
use crate::ConfigResult;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// Missing sections and keys fall back to their defaults.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(BenchConfig)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use catalogue_bench::config::load_config;
///
/// let config = load_config(Path::new("bench.toml")).unwrap();
/// println!("Pages: {}", config.catalogue.pages);
/// ```
pub fn load_config(path: &Path) -> ConfigResult<BenchConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from a TOML string
pub fn parse_config(content: &str) -> ConfigResult<BenchConfig> {
    let config: BenchConfig = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}
