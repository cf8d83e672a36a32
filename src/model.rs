use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScrapeError;
pub use crate::units::quantity::Quantity;

/// What the extractors found on a page, before any ingredient parsing.
///
/// Every field is optional or possibly empty; [`crate::extract_recipe`]
/// decides whether the page counts as a recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecipe {
    pub title: Option<String>,
    /// Deduplicated, in document order
    pub steps: Vec<String>,
    /// Deduplicated; sorted or in document order depending on the tier that matched
    pub ingredient_lines: Vec<String>,
    pub servings: Option<u32>,
}

/// One ingredient line split into amount, canonical unit and name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    pub quantity: Option<Quantity>,
    pub unit: Option<String>,
    pub name: String,
}

impl ParsedIngredient {
    pub fn new(quantity: Option<Quantity>, unit: Option<String>, name: impl Into<String>) -> Self {
        Self {
            quantity,
            unit,
            name: name.into(),
        }
    }
}

impl fmt::Display for ParsedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = [
            self.quantity.as_ref().map(ToString::to_string),
            self.unit.clone(),
            Some(self.name.clone()).filter(|n| !n.is_empty()),
        ]
        .into_iter()
        .flatten()
        .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// The two measurement systems the conversion tables translate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Millilitres, litres and grams
    Metric,
    /// Cups, spoons, ounces and pounds
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "us" | "customary" => Ok(UnitSystem::Imperial),
            other => Err(ScrapeError::UnknownUnitSystem(other.to_string())),
        }
    }
}

/// A successfully extracted recipe with parsed ingredients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub url: String,
    pub title: String,
    pub steps: Vec<String>,
    /// Pre-conversion ingredients, exactly as tokenized from the page
    pub ingredients: Vec<ParsedIngredient>,
    pub servings: u32,
    /// `None` when no ingredient carries a unit from either conversion table
    pub original_unit_system: Option<UnitSystem>,
}
