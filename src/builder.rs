use serde::Serialize;
use std::time::Duration;

use crate::config::ScraperConfig;
use crate::fetchers::RequestFetcher;
use crate::pipelines;
use crate::session::RecipeSession;
use crate::{ParsedIngredient, Recipe, ScrapeError, UnitSystem};

/// Result of a scrape: the recipe as extracted plus the ingredients after
/// any requested unit conversion and serving change.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeResult {
    pub recipe: Recipe,
    pub ingredients: Vec<ParsedIngredient>,
}

/// Builder for configuring and executing a recipe scrape
#[derive(Debug, Default)]
pub struct RecipeScraperBuilder {
    url: Option<String>,
    config: Option<ScraperConfig>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    unit_system: Option<UnitSystem>,
    servings: Option<f64>,
}

impl RecipeScraperBuilder {
    /// Set the page to scrape
    ///
    /// # Example
    /// ```
    /// use recipe_scraper::RecipeScraper;
    ///
    /// let builder = RecipeScraper::builder()
    ///     .url("https://example.com/recipe");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Use an explicit configuration instead of loading `config.toml` and the environment
    pub fn config(mut self, config: ScraperConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set a timeout for the page request
    ///
    /// # Example
    /// ```
    /// use recipe_scraper::RecipeScraper;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeScraper::builder()
    ///     .url("https://example.com/recipe")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Convert ingredient quantities into this unit system
    ///
    /// # Example
    /// ```
    /// use recipe_scraper::{RecipeScraper, UnitSystem};
    ///
    /// let builder = RecipeScraper::builder()
    ///     .url("https://example.com/recipe")
    ///     .unit_system(UnitSystem::Metric);
    /// ```
    pub fn unit_system(mut self, unit_system: UnitSystem) -> Self {
        self.unit_system = Some(unit_system);
        self
    }

    /// Rescale ingredient quantities to this many servings
    pub fn servings(mut self, servings: f64) -> Self {
        self.servings = Some(servings);
        self
    }

    /// Fetch the page, extract the recipe and apply any conversion
    ///
    /// # Errors
    /// Returns `ScrapeError` if:
    /// - No URL was specified
    /// - The page cannot be fetched
    /// - The page is not a recognizable recipe
    /// - The requested serving size is not positive
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_scraper::RecipeScraper;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = RecipeScraper::builder()
    ///     .url("https://example.com/recipe")
    ///     .servings(2.0)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<ScrapeResult, ScrapeError> {
        let url = self.url.ok_or_else(|| {
            ScrapeError::BuilderError("No URL specified. Use .url()".to_string())
        })?;

        let mut config = match self.config {
            Some(config) => config,
            None => ScraperConfig::load()?,
        };
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }

        let fetcher = RequestFetcher::new(
            self.timeout.unwrap_or(Duration::from_secs(config.timeout)),
            &config.user_agent,
        )?;
        let recipe = pipelines::process(&url, &fetcher, &config).await?;

        let mut session = RecipeSession::new(&recipe);
        if let Some(unit_system) = self.unit_system {
            session.convert_units(unit_system);
        }
        if let Some(servings) = self.servings {
            session.set_serving_size(servings)?;
        }

        Ok(ScrapeResult {
            ingredients: session.ingredients().to_vec(),
            recipe,
        })
    }
}

/// Main entry point for the builder API
pub struct RecipeScraper;

impl RecipeScraper {
    /// Creates a new builder for scraping a recipe
    ///
    /// # Example
    /// ```
    /// use recipe_scraper::RecipeScraper;
    ///
    /// let builder = RecipeScraper::builder();
    /// ```
    pub fn builder() -> RecipeScraperBuilder {
        RecipeScraperBuilder::default()
    }
}
