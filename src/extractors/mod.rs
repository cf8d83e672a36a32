//! Heuristic extraction of recipe parts from schema-less HTML.

use log::debug;
use scraper::Html;

mod dom;
pub mod ingredients;
pub mod servings;
pub mod steps;
pub mod title;

pub use ingredients::{extract_ingredients, HeadingLists, LabelledContainers, LabelledItems};
pub use servings::extract_servings;
pub use steps::{extract_steps, HeadingSteps, LabelledSteps};
pub use title::{name_from_url, TitleExtractor};

/// A parsed page together with the URL it came from.
pub struct ParsingContext {
    pub url: String,
    pub document: Html,
}

impl ParsingContext {
    /// Parse raw HTML. Malformed markup is repaired, never rejected.
    pub fn new(url: &str, html: &str) -> Self {
        Self {
            url: url.to_string(),
            document: Html::parse_document(html),
        }
    }
}

/// One way of pulling a list of lines (steps, ingredients) out of a page.
pub trait ListStrategy {
    fn name(&self) -> &str;
    fn extract(&self, context: &ParsingContext) -> Vec<String>;
}

/// Runs strategies in order and keeps the first non-empty result.
pub struct FallbackChain {
    strategies: Vec<Box<dyn ListStrategy>>,
}

impl FallbackChain {
    pub fn new(strategies: Vec<Box<dyn ListStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn extract(&self, context: &ParsingContext) -> Vec<String> {
        for strategy in &self.strategies {
            let lines = strategy.extract(context);
            if !lines.is_empty() {
                debug!("{} matched {} lines", strategy.name(), lines.len());
                return lines;
            }
            debug!("{} found nothing", strategy.name());
        }
        Vec::new()
    }
}
