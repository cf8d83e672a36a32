//! Recipe extraction from schema-less web pages, with ingredient unit
//! conversion and serving rescaling.

pub mod builder;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod pipelines;
pub mod session;
pub mod units;

pub use builder::{RecipeScraper, RecipeScraperBuilder, ScrapeResult};
pub use config::{ExtractionConfig, ScraperConfig};
pub use error::ScrapeError;
pub use extractors::ParsingContext;
pub use fetchers::{PageFetcher, RequestFetcher};
pub use model::{ParsedIngredient, Quantity, RawRecipe, Recipe, UnitSystem};
pub use pipelines::{extract_raw, extract_recipe};
pub use session::{RecipeSession, SessionStore};

/// Fetch a recipe page with the default configuration and extract it.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipe = recipe_scraper::fetch_recipe("https://example.com/best-banana-bread/").await?;
/// println!("{} serves {}", recipe.title, recipe.servings);
/// # Ok(())
/// # }
/// ```
pub async fn fetch_recipe(url: &str) -> Result<Recipe, ScrapeError> {
    fetch_recipe_with_config(url, &ScraperConfig::default()).await
}

/// Fetch and extract using an explicit configuration.
pub async fn fetch_recipe_with_config(url: &str, config: &ScraperConfig) -> Result<Recipe, ScrapeError> {
    let fetcher = RequestFetcher::from_config(config)?;
    pipelines::process(url, &fetcher, config).await
}
