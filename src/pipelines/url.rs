use log::{debug, info};

use crate::config::{ExtractionConfig, ScraperConfig};
use crate::error::ScrapeError;
use crate::extractors::{extract_ingredients, extract_servings, extract_steps, ParsingContext, TitleExtractor};
use crate::fetchers::PageFetcher;
use crate::model::{RawRecipe, Recipe};
use crate::units::parse_ingredient_lines;

/// Run every extractor over the page and collect whatever they found.
///
/// The serving count is only looked up once ingredients have been found;
/// pages without an ingredient list are not recipes.
pub fn extract_raw(context: &ParsingContext, config: &ExtractionConfig) -> RawRecipe {
    let title = TitleExtractor::new(config.title_similarity).extract(context);
    let steps = extract_steps(context);
    let ingredient_lines = extract_ingredients(context);
    let servings = if ingredient_lines.is_empty() {
        None
    } else {
        extract_servings(context)
    };

    RawRecipe {
        title,
        steps,
        ingredient_lines,
        servings,
    }
}

/// Extract a complete recipe, or fail if any part is missing.
///
/// Ingredients are tokenized and given canonical units; the result holds
/// the pre-conversion values that sessions derive from.
pub fn extract_recipe(context: &ParsingContext) -> Result<Recipe, ScrapeError> {
    extract_recipe_with_config(context, &ExtractionConfig::default())
}

pub(crate) fn extract_recipe_with_config(
    context: &ParsingContext,
    config: &ExtractionConfig,
) -> Result<Recipe, ScrapeError> {
    let raw = extract_raw(context, config);

    let (title, servings) = match (raw.title, raw.servings) {
        (Some(title), Some(servings)) if !raw.steps.is_empty() && !raw.ingredient_lines.is_empty() => {
            (title, servings)
        }
        (title, servings) => {
            debug!(
                "Incomplete recipe at {}: title={}, steps={}, ingredients={}, servings={}",
                context.url,
                title.is_some(),
                raw.steps.len(),
                raw.ingredient_lines.len(),
                servings.is_some()
            );
            return Err(ScrapeError::StructureNotRecognized);
        }
    };

    let (ingredients, original_unit_system) = parse_ingredient_lines(&raw.ingredient_lines);

    info!(
        "Extracted '{}': {} steps, {} ingredients, serves {}",
        title,
        raw.steps.len(),
        ingredients.len(),
        servings
    );

    Ok(Recipe {
        url: context.url.clone(),
        title,
        steps: raw.steps,
        ingredients,
        servings,
        original_unit_system,
    })
}

/// Fetch a page and extract the recipe on it.
pub async fn process(
    url: &str,
    fetcher: &dyn PageFetcher,
    config: &ScraperConfig,
) -> Result<Recipe, ScrapeError> {
    let html = fetcher.fetch(url).await?;
    let context = ParsingContext::new(url, &html);
    extract_recipe_with_config(&context, &config.extraction)
}
