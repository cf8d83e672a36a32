use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main scraper configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct ScraperConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with page requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Extraction heuristics configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            extraction: ExtractionConfig::default(),
        }
    }
}

/// Configuration for the extraction heuristics
#[derive(Debug, Deserialize, Clone)]
pub struct ExtractionConfig {
    /// Minimum token overlap between a heading and the URL-derived name
    /// for the heading to be used as the recipe title (0.0-1.0)
    #[serde(default = "default_title_similarity")]
    pub title_similarity: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            title_similarity: default_title_similarity(),
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_title_similarity() -> f64 {
    0.3
}

impl ScraperConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SCRAPER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SCRAPER__EXTRACTION__TITLE_SIMILARITY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ScraperConfig::load`] for the precedence rules.
pub fn load_config() -> Result<ScraperConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_SCRAPER__EXTRACTION__TITLE_SIMILARITY
        .add_source(
            Environment::with_prefix("RECIPE_SCRAPER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
