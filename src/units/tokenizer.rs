use log::debug;
use regex::Regex;
use std::sync::LazyLock;

use crate::model::{ParsedIngredient, Quantity};
use crate::units::quantity::VULGAR_FRACTIONS;

/// Leading amount, an optional unit word, and the rest of the line.
static INGREDIENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^((?:\d+\s*)?(?:\d*½|\d*¼|\d*¾|\d*⅛|\d*⅔|\d+\s*[/–-]|to\s*\d+)?[\s\d./–-]*)?\s*(?:([a-zA-Z]+)\b)?\s*(.*)$",
    )
    .expect("valid regex")
});

/// Words accepted as a unit when they appear right after the amount.
const UNIT_WORDS: &[&str] = &[
    "grams", "gram", "g", "kilograms", "kilogram", "kg", "milligrams", "milligram", "mg",
    "milliliters", "milliliter", "millilitres", "millilitre", "ml", "liters", "liter", "litres",
    "litre", "l", "centimeters", "centimeter", "cm", "cups", "cup", "tablespoons", "tablespoon",
    "tbsp", "tbs", "tb", "teaspoons", "teaspoon", "tsp", "pounds", "pound", "lbs", "lb", "ounces",
    "ounce", "oz", "cloves", "clove", "cans", "can", "tins", "tin", "jars", "jar",
];

/// Measurement units that may be glued to the following word ("cupsflour"),
/// longest first so "tablespoons" wins over "tablespoon".
const GLUED_UNITS: &[&str] = &[
    "milliliters", "millilitres", "tablespoons", "centimeters", "milliliter", "millilitre",
    "tablespoon", "centimeter", "kilograms", "teaspoons", "kilogram", "teaspoon", "liters",
    "litres", "pounds", "ounces", "grams", "liter", "litre", "pound", "ounce", "gram", "cups",
    "tbsp", "cup", "tsp",
];

/// Split one raw ingredient line into quantity, unit and name.
///
/// Lines that cannot be decomposed come back with no quantity and no unit,
/// the whole line becoming the name.
pub fn parse_ingredient(line: &str) -> ParsedIngredient {
    let Some(captures) = INGREDIENT_PATTERN.captures(line) else {
        debug!("Could not tokenize ingredient line: {:?}", line);
        return ParsedIngredient::new(None, None, line.trim());
    };

    let quantity = captures.get(1).and_then(|m| normalize_quantity(m.as_str()));
    let rest = captures.get(3).map_or("", |m| m.as_str());

    let (unit, name) = match captures.get(2) {
        Some(word) => resolve_unit(word.as_str(), rest),
        None => (None, rest.trim().to_string()),
    };

    ParsedIngredient {
        quantity,
        unit,
        name,
    }
}

/// Turn the captured amount into a quantity.
///
/// Ranges keep their glyphs; single amounts have them rewritten as slash fractions.
fn normalize_quantity(raw: &str) -> Option<Quantity> {
    if raw.contains(&['-', '–'][..]) {
        Quantity::parse(raw)
    } else if raw.contains("to") {
        let joined = raw
            .split("to")
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("-");
        Quantity::parse(&joined)
    } else {
        let mut text = raw.to_string();
        for (glyph, fraction) in VULGAR_FRACTIONS {
            // "2½" must read as "2 1/2", not "21/2"
            text = text.replace(glyph, &format!(" {fraction}"));
        }
        Quantity::parse(&text.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}

/// Decide whether the word after the amount is a unit.
fn resolve_unit(word: &str, rest: &str) -> (Option<String>, String) {
    let lower = word.to_lowercase();

    if UNIT_WORDS.contains(&lower.as_str()) {
        return (Some(word.to_string()), strip_abbreviation_dot(rest));
    }

    if let Some(unit) = GLUED_UNITS.iter().find(|unit| lower.starts_with(*unit)) {
        let (unit_part, remainder) = word.split_at(unit.len());
        let name = format!("{} {}", remainder, strip_abbreviation_dot(rest));
        return (Some(unit_part.to_string()), name.trim().to_string());
    }

    (None, format!("{} {}", word, rest).trim().to_string())
}

/// Drop the period an abbreviated unit leaves behind ("tsp. salt").
fn strip_abbreviation_dot(rest: &str) -> String {
    rest.trim().trim_start_matches('.').trim().to_string()
}
