use log::{debug, info};

use crate::model::{ParsedIngredient, Quantity, UnitSystem};
use crate::units::quantity::{format_decimal, round_to};
use crate::units::scale::scale_servings;

/// Ordered multiplier table: source unit → (target unit, factor), first entry is the default.
pub struct ConversionTable {
    rows: &'static [(&'static str, &'static [(&'static str, f64)])],
}

impl ConversionTable {
    fn row(&self, unit: &str) -> Option<&'static [(&'static str, f64)]> {
        self.rows
            .iter()
            .find(|(source, _)| *source == unit)
            .map(|(_, targets)| *targets)
    }

    /// Whether the unit can be converted with this table.
    pub fn contains(&self, unit: &str) -> bool {
        self.row(unit).is_some()
    }

    /// Multiplier from `unit` to `target`, if the table has that pair.
    pub fn factor(&self, unit: &str, target: &str) -> Option<f64> {
        self.row(unit)?
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, factor)| *factor)
    }

    fn default_target(&self, unit: &str) -> Option<&'static str> {
        self.row(unit)?.first().map(|(target, _)| *target)
    }
}

/// Imperial units to millilitres and grams.
pub static TO_METRIC: ConversionTable = ConversionTable {
    rows: &[
        ("cups", &[("ml", 236.588), ("g", 125.39)]),
        ("cup", &[("ml", 236.588), ("g", 125.39)]),
        ("tbsp", &[("ml", 14.78676), ("g", 7.83688)]),
        ("tsp", &[("ml", 4.92892), ("g", 2.61229)]),
        ("lb", &[("g", 453.592)]),
        ("oz", &[("g", 28.3495)]),
    ],
};

/// Metric units to cups, ounces and pounds.
pub static TO_IMPERIAL: ConversionTable = ConversionTable {
    rows: &[
        ("ml", &[("cups", 0.00422675), ("cup", 0.00422675)]),
        ("l", &[("cups", 4.22675), ("cup", 4.22675)]),
        (
            "g",
            &[
                ("oz", 0.03527396),
                ("cup", 0.007975),
                ("cups", 0.007975),
                // Never chosen by target selection
                ("lb", 0.00220462),
            ],
        ),
    ],
};

const VOLUME_UNITS: &[&str] = &["cup", "cups", "tsp", "tbsp"];
const MASS_UNITS: &[&str] = &["g", "kg", "mg", "oz", "lb"];
const LIQUIDS: &[&str] = &["water", "oil", "milk", "honey"];
const SOLIDS: &[&str] = &["flour", "pepper", "salt"];

/// The table that converts *into* the given system.
pub fn table_for(target: UnitSystem) -> &'static ConversionTable {
    match target {
        UnitSystem::Metric => &TO_METRIC,
        UnitSystem::Imperial => &TO_IMPERIAL,
    }
}

/// Convert ingredients into `target`, or return the untouched snapshot when
/// `target` is the recipe's own system.
///
/// Returns `None` for an empty ingredient list. When the target is the
/// original system a requested serving change is applied to the snapshot;
/// otherwise serving changes are left to the caller.
pub fn convert_units(
    ingredients: &[ParsedIngredient],
    target: UnitSystem,
    requested_servings: Option<f64>,
    original_servings: u32,
    original_system: Option<UnitSystem>,
    snapshot: &[ParsedIngredient],
) -> Option<Vec<ParsedIngredient>> {
    if ingredients.is_empty() {
        return None;
    }

    if original_system == Some(target) {
        return match requested_servings {
            Some(requested) if requested != f64::from(original_servings) => {
                debug!("Target is the original system, rescaling snapshot");
                Some(scale_servings(snapshot, original_servings, requested))
            }
            _ => {
                debug!("Target is the original system, returning snapshot");
                Some(snapshot.to_vec())
            }
        };
    }

    let table = table_for(target);
    let converted: Vec<ParsedIngredient> = ingredients
        .iter()
        .map(|ingredient| convert_ingredient(ingredient, table).unwrap_or_else(|| ingredient.clone()))
        .collect();

    info!("Converted {} ingredients to {}", converted.len(), target);
    Some(converted)
}

/// Convert one ingredient, or `None` when it has no numeric amount or no table unit.
fn convert_ingredient(ingredient: &ParsedIngredient, table: &ConversionTable) -> Option<ParsedIngredient> {
    let unit = ingredient.unit.as_deref()?;
    let values = ingredient.quantity.as_ref()?.values()?;
    if !table.contains(unit) {
        return None;
    }

    let target = choose_target(unit, &ingredient.name, table)?;
    let factor = table.factor(unit, target)?;
    let raw: Vec<f64> = values.iter().map(|v| v * factor).collect();

    // The low endpoint decides the display unit for the whole range
    let (display_unit, rescale) = normalize_magnitude(target, *raw.first()?);
    let rendered = raw
        .iter()
        .map(|v| format_decimal(round_to(v * rescale, 2)))
        .collect();

    Some(ParsedIngredient {
        quantity: Quantity::from_endpoints(rendered),
        unit: Some(display_unit.to_string()),
        name: ingredient.name.clone(),
    })
}

/// Pick the target unit, preferring ml for liquids and cups for dry goods.
fn choose_target(unit: &str, name: &str, table: &ConversionTable) -> Option<&'static str> {
    let name = name.to_lowercase();
    let preferred = if VOLUME_UNITS.contains(&unit) {
        if LIQUIDS.iter().any(|liquid| name.contains(liquid)) {
            Some("ml")
        } else {
            Some("g")
        }
    } else if MASS_UNITS.contains(&unit) && SOLIDS.iter().any(|solid| name.contains(solid)) {
        Some("cups")
    } else {
        None
    };

    match preferred.and_then(|p| table.row(unit)?.iter().find(|(t, _)| *t == p)) {
        Some((target, _)) => Some(*target),
        None => table.default_target(unit),
    }
}

/// Move very small cup amounts to spoons and large ounce amounts to pounds.
///
/// Returns the display unit and the multiplier to apply to the value.
pub fn normalize_magnitude(unit: &'static str, value: f64) -> (&'static str, f64) {
    match unit {
        "cup" | "cups" if value < 0.1 => {
            // 1 cup = 48 tsp, 1 tbsp = 3 tsp
            if value * 48.0 >= 3.0 {
                ("tbsp", 16.0)
            } else {
                ("tsp", 48.0)
            }
        }
        "oz" if value >= 32.0 => ("lb", 1.0 / 16.0),
        _ => (unit, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(quantity: &str, unit: &str, name: &str) -> ParsedIngredient {
        ParsedIngredient::new(Quantity::parse(quantity), Some(unit.to_string()), name)
    }

    #[test]
    fn test_liquid_cups_to_ml() {
        let converted = convert_ingredient(&ingredient("2", "cups", "oil"), &TO_METRIC).unwrap();
        assert_eq!(converted.unit.as_deref(), Some("ml"));
        assert_eq!(converted.quantity, Some(Quantity::Single("473.18".into())));
    }

    #[test]
    fn test_dry_cups_to_grams() {
        let converted = convert_ingredient(&ingredient("1", "cup", "sugar"), &TO_METRIC).unwrap();
        assert_eq!(converted.unit.as_deref(), Some("g"));
        assert_eq!(converted.quantity, Some(Quantity::Single("125.39".into())));
    }

    #[test]
    fn test_grams_of_flour_to_cups() {
        let converted = convert_ingredient(&ingredient("250", "g", "flour"), &TO_IMPERIAL).unwrap();
        assert_eq!(converted.unit.as_deref(), Some("cups"));
        assert_eq!(converted.quantity, Some(Quantity::Single("1.99".into())));
    }

    #[test]
    fn test_grams_default_to_ounces() {
        let converted = convert_ingredient(&ingredient("100", "g", "butter"), &TO_IMPERIAL).unwrap();
        assert_eq!(converted.unit.as_deref(), Some("oz"));
        assert_eq!(converted.quantity, Some(Quantity::Single("3.53".into())));
    }

    #[test]
    fn test_large_ounces_become_pounds() {
        let converted = convert_ingredient(&ingredient("1000", "g", "beef"), &TO_IMPERIAL).unwrap();
        assert_eq!(converted.unit.as_deref(), Some("lb"));
        assert_eq!(converted.quantity, Some(Quantity::Single("2.2".into())));
    }

    #[test]
    fn test_small_ml_become_teaspoons() {
        let converted = convert_ingredient(&ingredient("5", "ml", "vanilla"), &TO_IMPERIAL).unwrap();
        assert_eq!(converted.unit.as_deref(), Some("tsp"));
        assert_eq!(converted.quantity, Some(Quantity::Single("1.01".into())));
    }

    #[test]
    fn test_magnitude_normalization() {
        let (unit, rescale) = normalize_magnitude("cups", 0.05);
        assert_eq!(unit, "tsp");
        assert!((0.05 * rescale - 2.4).abs() < 1e-9);

        let (unit, rescale) = normalize_magnitude("cups", 0.09);
        assert_eq!(unit, "tbsp");
        assert!((round_to(0.09 * rescale, 2) - 1.44).abs() < 1e-9);

        assert_eq!(normalize_magnitude("cups", 0.5), ("cups", 1.0));
        assert_eq!(normalize_magnitude("oz", 40.0), ("lb", 1.0 / 16.0));
        assert_eq!(normalize_magnitude("oz", 31.9), ("oz", 1.0));
    }

    #[test]
    fn test_range_endpoints_share_a_unit() {
        let converted = convert_ingredient(&ingredient("1-2", "cups", "milk"), &TO_METRIC).unwrap();
        assert_eq!(converted.unit.as_deref(), Some("ml"));
        assert_eq!(
            converted.quantity,
            Some(Quantity::Range("236.59".into(), "473.18".into()))
        );
    }

    #[test]
    fn test_unconvertible_ingredients_pass_through() {
        assert!(convert_ingredient(&ingredient("2", "cloves", "garlic"), &TO_METRIC).is_none());
        assert!(convert_ingredient(&ingredient("a few", "cups", "ice"), &TO_METRIC).is_none());
        let no_unit = ParsedIngredient::new(Quantity::parse("2"), None, "eggs");
        assert!(convert_ingredient(&no_unit, &TO_METRIC).is_none());
    }

    #[test]
    fn test_empty_input_is_absent() {
        assert!(convert_units(&[], UnitSystem::Metric, None, 4, None, &[]).is_none());
    }

    #[test]
    fn test_same_system_returns_snapshot() {
        let snapshot = vec![ingredient("1 1/2", "cups", "flour")];
        let converted = vec![ingredient("188.09", "g", "flour")];
        let result = convert_units(
            &converted,
            UnitSystem::Imperial,
            Some(4.0),
            4,
            Some(UnitSystem::Imperial),
            &snapshot,
        )
        .unwrap();
        assert_eq!(result, snapshot);
    }

    #[test]
    fn test_same_system_with_serving_change_scales_snapshot() {
        let snapshot = vec![ingredient("1/2", "cup", "sugar")];
        let result = convert_units(
            &snapshot,
            UnitSystem::Imperial,
            Some(2.0),
            4,
            Some(UnitSystem::Imperial),
            &snapshot,
        )
        .unwrap();
        assert_eq!(result[0].quantity, Some(Quantity::Single("1/4".into())));
    }
}
