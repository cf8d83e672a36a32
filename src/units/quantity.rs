use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Vulgar fraction glyphs and the slash fractions they stand for.
pub(crate) const VULGAR_FRACTIONS: [(char, &str); 5] = [
    ('½', "1/2"),
    ('¼', "1/4"),
    ('¾', "3/4"),
    ('⅛', "1/8"),
    ('⅔', "2/3"),
];

/// An ingredient amount as written on the page or produced by a conversion.
///
/// The endpoint text is kept as-is so that the pre-conversion snapshot can be
/// handed back unchanged. Numeric work goes through [`Quantity::values`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quantity {
    /// A single amount such as `2`, `3 1/4` or `473.18`
    Single(String),
    /// A range such as `2-3`; both endpoints are non-empty
    Range(String, String),
}

impl Quantity {
    /// Interpret normalized quantity text, splitting ranges on `-` or `–`.
    ///
    /// Returns `None` for empty text. A dash without two endpoints is kept as
    /// a single, non-numeric quantity.
    pub fn parse(text: &str) -> Option<Quantity> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Some((low, high)) = text.split_once(&['-', '–'][..]) {
            let (low, high) = (low.trim(), high.trim());
            if !low.is_empty() && !high.is_empty() {
                return Some(Quantity::Range(low.to_string(), high.to_string()));
            }
        }

        Some(Quantity::Single(text.to_string()))
    }

    /// Endpoint texts, one for a single amount and two for a range.
    pub fn endpoints(&self) -> Vec<&str> {
        match self {
            Quantity::Single(text) => vec![text.as_str()],
            Quantity::Range(low, high) => vec![low.as_str(), high.as_str()],
        }
    }

    /// Numeric value of every endpoint, or `None` if any endpoint is not a number.
    pub fn values(&self) -> Option<Vec<f64>> {
        self.endpoints().into_iter().map(parse_amount).collect()
    }

    /// Build a quantity of the same shape from rendered endpoint values.
    pub(crate) fn from_endpoints(mut rendered: Vec<String>) -> Option<Quantity> {
        match rendered.len() {
            1 => rendered.pop().map(Quantity::Single),
            2 => {
                let high = rendered.pop()?;
                let low = rendered.pop()?;
                Some(Quantity::Range(low, high))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Single(text) => write!(f, "{text}"),
            Quantity::Range(low, high) => write!(f, "{low}-{high}"),
        }
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Quantity::parse(&text).ok_or_else(|| serde::de::Error::custom("empty quantity"))
    }
}

/// Sum the whitespace-separated parts of an amount: `3 1/4` is 3.25, `1½` is 1.5.
pub fn parse_amount(text: &str) -> Option<f64> {
    let mut total = 0.0;
    let mut parts = 0;

    for part in text.split_whitespace() {
        total += parse_part(part)?;
        parts += 1;
    }

    (parts > 0).then_some(total)
}

fn parse_part(part: &str) -> Option<f64> {
    // Glyphs may trail a whole number with no space, as in "1½"
    if let Some(glyph) = part.chars().last() {
        if let Some((_, fraction)) = VULGAR_FRACTIONS.iter().find(|(g, _)| *g == glyph) {
            let whole = &part[..part.len() - glyph.len_utf8()];
            let whole = if whole.is_empty() {
                0.0
            } else {
                whole.parse::<f64>().ok()?
            };
            return Some(whole + parse_part(fraction)?);
        }
    }

    if let Some((numerator, denominator)) = part.split_once('/') {
        let numerator: f64 = numerator.parse().ok()?;
        let denominator: f64 = denominator.parse().ok()?;
        if denominator == 0.0 {
            return None;
        }
        return Some(numerator / denominator);
    }

    let value: f64 = part.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Round to a fixed number of decimal places.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Render a decimal without a trailing `.0`.
pub(crate) fn format_decimal(value: f64) -> String {
    // Avoid printing "-0" for values that rounded to zero
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_and_range() {
        assert_eq!(Quantity::parse("2"), Some(Quantity::Single("2".into())));
        assert_eq!(
            Quantity::parse("1-2"),
            Some(Quantity::Range("1".into(), "2".into()))
        );
        assert_eq!(
            Quantity::parse("1–2"),
            Some(Quantity::Range("1".into(), "2".into()))
        );
        assert_eq!(Quantity::parse("   "), None);
    }

    #[test]
    fn test_dangling_dash_is_not_a_range() {
        let quantity = Quantity::parse("1-").unwrap();
        assert_eq!(quantity, Quantity::Single("1-".into()));
        assert_eq!(quantity.values(), None);
    }

    #[test]
    fn test_parse_amount_mixed_numbers() {
        assert_eq!(parse_amount("3 1/4"), Some(3.25));
        assert_eq!(parse_amount("1/2"), Some(0.5));
        assert_eq!(parse_amount("1½"), Some(1.5));
        assert_eq!(parse_amount("¾"), Some(0.75));
        assert_eq!(parse_amount("473.18"), Some(473.18));
        assert_eq!(parse_amount("1/0"), None);
        assert_eq!(parse_amount("a few"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_display_matches_parse_input() {
        for text in ["2", "3 1/4", "12-16", "½-1"] {
            assert_eq!(Quantity::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_serde_uses_display_string() {
        let quantity = Quantity::Range("1".into(), "2".into());
        let json = serde_json::to_string(&quantity).unwrap();
        assert_eq!(json, "\"1-2\"");
        let back: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, quantity);
    }

    #[test]
    fn test_format_decimal_strips_trailing_zero() {
        assert_eq!(format_decimal(4.0), "4");
        assert_eq!(format_decimal(2.4), "2.4");
        assert_eq!(format_decimal(round_to(473.176, 2)), "473.18");
        assert_eq!(format_decimal(-0.0), "0");
    }
}
