use log::debug;

use crate::model::{ParsedIngredient, Quantity};
use crate::units::quantity::{format_decimal, parse_amount, round_to};

/// Fractional parts rendered as slash fractions, keyed by thousandths.
const DISPLAY_FRACTIONS: &[(i64, &str)] = &[(125, "1/8"), (250, "1/4"), (500, "1/2"), (750, "3/4")];

/// Rescale every numeric quantity from `original_servings` to `requested_servings`.
///
/// Range endpoints are scaled independently; ingredients whose quantity is
/// missing or not a number are returned unchanged.
pub fn scale_servings(
    ingredients: &[ParsedIngredient],
    original_servings: u32,
    requested_servings: f64,
) -> Vec<ParsedIngredient> {
    debug!(
        "Scaling {} ingredients from {} to {} servings",
        ingredients.len(),
        original_servings,
        requested_servings
    );

    ingredients
        .iter()
        .map(|ingredient| {
            let quantity = ingredient
                .quantity
                .as_ref()
                .and_then(|q| scale_quantity(q, original_servings, requested_servings));
            match quantity {
                Some(quantity) => ParsedIngredient {
                    quantity: Some(quantity),
                    ..ingredient.clone()
                },
                None => ingredient.clone(),
            }
        })
        .collect()
}

fn scale_quantity(quantity: &Quantity, original_servings: u32, requested_servings: f64) -> Option<Quantity> {
    if original_servings == 0 {
        return None;
    }

    let rendered = quantity
        .endpoints()
        .into_iter()
        .map(|endpoint| {
            let base = parse_amount(endpoint)? / f64::from(original_servings);
            Some(render_amount(round_to(base * requested_servings, 3)))
        })
        .collect::<Option<Vec<String>>>()?;

    Quantity::from_endpoints(rendered)
}

/// Render a decimal the way recipes write it: 0.5 as `1/2`, 1.5 as `1 1/2`, 4.0 as `4`.
pub fn render_amount(value: f64) -> String {
    let whole = value.trunc();
    let thousandths = ((value - whole) * 1000.0).round() as i64;

    let fraction = DISPLAY_FRACTIONS
        .iter()
        .find(|(t, _)| *t == thousandths)
        .map(|(_, f)| *f)
        .or_else(|| (662..=671).contains(&thousandths).then_some("2/3"));

    match fraction {
        Some(fraction) if whole == 0.0 => fraction.to_string(),
        Some(fraction) => format!("{} {}", format_decimal(whole), fraction),
        None => format_decimal(value),
    }
}
