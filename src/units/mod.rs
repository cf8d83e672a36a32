//! Ingredient quantities: tokenizing raw lines, canonical units, conversion
//! between unit systems and rescaling to a different serving count.

pub mod convert;
pub mod normalize;
pub mod quantity;
pub mod scale;
pub mod tokenizer;

pub use convert::{convert_units, normalize_magnitude, ConversionTable, TO_IMPERIAL, TO_METRIC};
pub use normalize::{canonical_unit, detect_unit_system, standardize_units};
pub use quantity::parse_amount;
pub use scale::{render_amount, scale_servings};
pub use tokenizer::parse_ingredient;

use crate::model::{ParsedIngredient, UnitSystem};

/// Tokenize and canonicalize raw ingredient lines, and detect the unit system they use.
pub fn parse_ingredient_lines(lines: &[String]) -> (Vec<ParsedIngredient>, Option<UnitSystem>) {
    let mut ingredients: Vec<ParsedIngredient> =
        lines.iter().map(|line| parse_ingredient(line)).collect();
    standardize_units(&mut ingredients);
    let system = detect_unit_system(&ingredients);
    (ingredients, system)
}
