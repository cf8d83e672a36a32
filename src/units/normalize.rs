use log::debug;

use crate::model::{ParsedIngredient, UnitSystem};
use crate::units::convert::{TO_IMPERIAL, TO_METRIC};

/// Spelling variants and the canonical token they map to.
const UNIT_SYNONYMS: &[(&str, &str)] = &[
    ("g", "g"),
    ("gram", "g"),
    ("grams", "g"),
    ("kg", "kg"),
    ("kilogram", "kg"),
    ("kilograms", "kg"),
    ("mg", "mg"),
    ("milligram", "mg"),
    ("milligrams", "mg"),
    ("l", "l"),
    ("liter", "l"),
    ("liters", "l"),
    ("litre", "l"),
    ("litres", "l"),
    ("ml", "ml"),
    ("milliliter", "ml"),
    ("milliliters", "ml"),
    ("millilitre", "ml"),
    ("millilitres", "ml"),
    ("lb", "lb"),
    ("lbs", "lb"),
    ("pound", "lb"),
    ("pounds", "lb"),
    ("oz", "oz"),
    ("ounce", "oz"),
    ("ounces", "oz"),
    ("tsp", "tsp"),
    ("teaspoon", "tsp"),
    ("teaspoons", "tsp"),
    ("tbsp", "tbsp"),
    ("tbs", "tbsp"),
    ("tb", "tbsp"),
    ("tablespoon", "tbsp"),
    ("tablespoons", "tbsp"),
    ("cup", "cup"),
    ("cups", "cups"),
];

/// Strip periods and surrounding whitespace, then lower-case.
fn clean_unit(unit: &str) -> String {
    unit.split('.')
        .map(str::trim)
        .collect::<String>()
        .trim()
        .to_lowercase()
}

/// Map a unit token to its canonical spelling; unknown tokens come back unchanged.
pub fn canonical_unit(unit: &str) -> String {
    let cleaned = clean_unit(unit);
    UNIT_SYNONYMS
        .iter()
        .find(|(variant, _)| *variant == cleaned)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| unit.to_string())
}

/// Canonicalize the unit of every ingredient in place.
pub fn standardize_units(ingredients: &mut [ParsedIngredient]) {
    for ingredient in ingredients.iter_mut() {
        if let Some(unit) = ingredient.unit.as_mut() {
            *unit = canonical_unit(unit);
        }
    }
}

/// Guess which system a recipe is written in from the units it uses.
///
/// Units convertible *to* metric mark the recipe as imperial and vice versa.
/// Both checks run and the metric check goes last, so a recipe mixing
/// `tsp` with `g` is classified as metric.
pub fn detect_unit_system(ingredients: &[ParsedIngredient]) -> Option<UnitSystem> {
    let mut detected = None;
    let units = || ingredients.iter().filter_map(|i| i.unit.as_deref());

    if units().any(|unit| TO_METRIC.contains(unit)) {
        detected = Some(UnitSystem::Imperial);
    }
    if units().any(|unit| TO_IMPERIAL.contains(unit)) {
        detected = Some(UnitSystem::Metric);
    }

    debug!("Detected original unit system: {:?}", detected);
    detected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_unit(unit: &str) -> ParsedIngredient {
        ParsedIngredient::new(None, Some(unit.to_string()), "x")
    }

    #[test]
    fn test_canonical_unit_variants() {
        assert_eq!(canonical_unit("grams"), "g");
        assert_eq!(canonical_unit("Gram"), "g");
        assert_eq!(canonical_unit("pounds"), "lb");
        assert_eq!(canonical_unit("lb."), "lb");
        assert_eq!(canonical_unit(" Tbsp . "), "tbsp");
        assert_eq!(canonical_unit("Cups"), "cups");
    }

    #[test]
    fn test_unknown_unit_passes_through() {
        assert_eq!(canonical_unit("cloves"), "cloves");
        assert_eq!(canonical_unit("Pinch"), "Pinch");
    }

    #[test]
    fn test_standardize_units_leaves_missing_units() {
        let mut ingredients = vec![with_unit("tablespoons"), ParsedIngredient::new(None, None, "eggs")];
        standardize_units(&mut ingredients);
        assert_eq!(ingredients[0].unit.as_deref(), Some("tbsp"));
        assert_eq!(ingredients[1].unit, None);
    }

    #[test]
    fn test_detect_unit_system() {
        assert_eq!(detect_unit_system(&[with_unit("cups")]), Some(UnitSystem::Imperial));
        assert_eq!(detect_unit_system(&[with_unit("ml")]), Some(UnitSystem::Metric));
        assert_eq!(detect_unit_system(&[with_unit("cloves")]), None);
        assert_eq!(detect_unit_system(&[]), None);
    }

    #[test]
    fn test_detect_mixed_units_prefers_metric() {
        let ingredients = [with_unit("tsp"), with_unit("g")];
        assert_eq!(detect_unit_system(&ingredients), Some(UnitSystem::Metric));
    }
}
