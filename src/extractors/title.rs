use log::debug;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

use super::dom::{attr_matches, element_text};
use super::ParsingContext;

static TITLE_HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2").expect("valid title heading selector"));

static TITLE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)title|heading").expect("valid regex"));

/// Picks the recipe name from the URL slug and the page's title headings.
pub struct TitleExtractor {
    /// Minimum word overlap with the URL-derived name for a heading to win
    pub similarity_threshold: f64,
}

impl Default for TitleExtractor {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.3,
        }
    }
}

impl TitleExtractor {
    pub fn new(similarity_threshold: f64) -> Self {
        Self {
            similarity_threshold,
        }
    }

    /// Returns the first title-cased heading that resembles the URL, or the
    /// URL-derived name. `None` only when both are empty.
    pub fn extract(&self, context: &ParsingContext) -> Option<String> {
        let from_url = name_from_url(&context.url);

        for heading in title_headings(&context.document) {
            let score = similarity(&heading, &from_url);
            if score >= self.similarity_threshold {
                debug!("Using heading '{}' as title (similarity {:.2})", heading, score);
                return Some(heading);
            }
        }

        debug!("Using URL-derived title '{}'", from_url);
        Some(from_url).filter(|name| !name.is_empty())
    }
}

/// Turn the last path segment into a name: `/best-banana-bread.html` → `Best Banana Bread`.
pub fn name_from_url(url: &str) -> String {
    let url = url.strip_suffix('/').unwrap_or(url);
    let segment = match Url::parse(url) {
        Ok(parsed) => parsed.path().rsplit('/').next().unwrap_or_default().to_string(),
        Err(_) => url.rsplit('/').next().unwrap_or_default().to_string(),
    };

    let titled = title_case(&segment.replace(['-', '_'], " "));
    titled
        .split('.')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// `h1`/`h2` texts labelled as a title by id (first) or class, kept only if already title-cased.
fn title_headings(document: &Html) -> Vec<String> {
    let headings: Vec<_> = document.select(&TITLE_HEADING_SELECTOR).collect();

    let by_id = headings
        .iter()
        .filter(|h| attr_matches(**h, "id", &TITLE_LABEL));
    let by_class = headings
        .iter()
        .filter(|h| attr_matches(**h, "class", &TITLE_LABEL));

    by_id
        .chain(by_class)
        .map(|h| element_text(*h))
        .filter(|text| is_title_case(text))
        .collect()
}

/// Word-set overlap relative to the larger set.
fn similarity(heading: &str, from_url: &str) -> f64 {
    let words = |s: &str| -> HashSet<String> { s.to_lowercase().split_whitespace().map(String::from).collect() };
    let (a, b) = (words(heading), words(from_url));
    let larger = a.len().max(b.len());
    if larger == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / larger as f64
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

/// Upper-case letters that follow a non-letter, lower-case the rest.
fn title_case(text: &str) -> String {
    let mut previous_cased = false;
    text.chars()
        .flat_map(|c| {
            let converted: Vec<char> = if !is_cased(c) {
                vec![c]
            } else if previous_cased {
                c.to_lowercase().collect()
            } else {
                c.to_uppercase().collect()
            };
            previous_cased = is_cased(c);
            converted
        })
        .collect()
}

/// True when every word starts upper-case and continues lower-case.
fn is_title_case(text: &str) -> bool {
    let mut previous_cased = false;
    let mut any_cased = false;

    for c in text.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            any_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            any_cased = true;
        } else {
            previous_cased = false;
        }
    }

    any_cased
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_url() {
        assert_eq!(
            name_from_url("https://example.com/recipes/best-banana-bread/"),
            "Best Banana Bread"
        );
        assert_eq!(
            name_from_url("https://example.com/easy_beef_stew.html"),
            "Easy Beef Stew"
        );
        assert_eq!(name_from_url("not a url/chicken-soup"), "Chicken Soup");
        assert_eq!(name_from_url("https://example.com/"), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("mom's apple pie"), "Mom'S Apple Pie");
        assert_eq!(title_case("BEST chili 2"), "Best Chili 2");
    }

    #[test]
    fn test_is_title_case() {
        assert!(is_title_case("Best Banana Bread"));
        assert!(is_title_case("Pad Thai (Easy)"));
        assert!(!is_title_case("How to Make Banana Bread"));
        assert!(!is_title_case("BANANA BREAD"));
        assert!(!is_title_case("2024"));
    }

    #[test]
    fn test_similarity() {
        assert_eq!(similarity("Best Banana Bread", "Best Banana Bread"), 1.0);
        assert!((similarity("Banana Bread", "Best Banana Bread Recipe") - 0.5).abs() < 1e-9);
        assert_eq!(similarity("Newsletter", "Best Banana Bread"), 0.0);
    }
}
