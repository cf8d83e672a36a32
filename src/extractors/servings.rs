use log::debug;
use regex::Regex;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

use super::dom::{element_text, following, parent_element};
use super::ParsingContext;

static CANDIDATE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p, span, em, div").expect("valid servings selector"));

static INLINE_SERVINGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Yields:|Serves:|Servings:|Yield:|Serving:)\s*(.+)").expect("valid regex")
});

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

const SERVING_KEYWORDS: &[&str] = &["serves", "servings", "yield", "yields", "serving"];

/// Segments longer than this still carry other text ("4 people, prep 10 min").
const LONG_SEGMENT: usize = 12;

/// Text shorter than this next to a servings label is taken as the count.
const SHORT_TEXT: usize = 10;

/// Find the number of servings the recipe makes.
///
/// Elements mentioning servings are checked in document order. The count is
/// read from the same element ("Serves: 4") or from a short numeric element
/// nearby (`<span>Serves</span><span>4</span>`).
pub fn extract_servings(context: &ParsingContext) -> Option<u32> {
    let document = &context.document;

    let candidates = document.select(&CANDIDATE_SELECTOR).filter(|element| {
        let text = element_text(*element).to_lowercase();
        SERVING_KEYWORDS.iter().any(|keyword| text.contains(keyword))
    });

    for candidate in candidates {
        let text = element_text(candidate);

        if let Some(captures) = INLINE_SERVINGS.captures(&text) {
            if let Some(count) = captures.get(2).and_then(|m| inline_count(m.as_str())) {
                debug!("Found servings {} inline in {:?}", count, text);
                return Some(count);
            }
            continue;
        }

        if let Some(count) = following(document, candidate).find_map(short_count) {
            debug!("Found servings {} after {:?}", count, text);
            return Some(count);
        }

        let Some(parent) = parent_element(candidate) else {
            continue;
        };
        let siblings = parent.next_siblings().filter_map(ElementRef::wrap);
        if let Some(count) = std::iter::once(parent).chain(siblings).find_map(short_count) {
            debug!("Found servings {} near the parent of {:?}", count, text);
            return Some(count);
        }
    }

    None
}

/// Read the count from the text after an inline "Serves:" label.
fn inline_count(remainder: &str) -> Option<u32> {
    let first = remainder.split(',').next().unwrap_or_default();
    let segment = if first.chars().count() > LONG_SEGMENT {
        first.split(' ').next().unwrap_or_default()
    } else {
        first
    };
    first_number(segment)
}

/// The element's number, if its text is short enough to be just a count.
fn short_count(element: ElementRef<'_>) -> Option<u32> {
    let text = element.text().collect::<String>();
    let text = text.trim();
    if text.chars().count() < SHORT_TEXT {
        first_number(text)
    } else {
        None
    }
}

/// First run of digits as a positive integer.
fn first_number(text: &str) -> Option<u32> {
    DIGITS
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .filter(|count| *count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_number_reads_whole_digit_run() {
        assert_eq!(first_number("12 people"), Some(12));
        assert_eq!(first_number("about 0"), None);
        assert_eq!(first_number("none"), None);
    }

    #[test]
    fn test_inline_count_trims_long_segments() {
        assert_eq!(inline_count("4"), Some(4));
        assert_eq!(inline_count("6 people, prep 10 min"), Some(6));
        assert_eq!(inline_count("8-10 hungry teenagers"), Some(8));
    }
}
