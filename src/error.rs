use thiserror::Error;

/// Errors that can occur while scraping or rescaling a recipe
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Failed to fetch the recipe page
    #[error("Failed to fetch recipe data: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The page did not yield a title, steps, ingredients and a serving count
    #[error("Recipe structure not recognized on this page")]
    StructureNotRecognized,

    /// A conversion or scaling was requested before any recipe was extracted
    #[error("No active recipe for this session")]
    NoActiveRecipe,

    /// The requested serving size is not a positive number
    #[error("Invalid serving size: {0}")]
    InvalidServingSize(String),

    /// The requested unit system is not one of the supported tables
    #[error("Unknown unit system: {0}")]
    UnknownUnitSystem(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
