//! Shared selectors and document-walking helpers for the extractors.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Selector for all heading levels.
pub(crate) static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4, h5, h6").expect("valid heading selector"));

/// Selector for list items.
pub(crate) static LI_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li").expect("valid li selector"));

/// Selector for paragraphs and list items, the elements labelled by class.
pub(crate) static P_LI_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p, li").expect("valid p/li selector"));

/// Checkbox glyph some recipe plugins print before every line.
const CHECKBOX: char = '▢';

/// Text of an element with runs of whitespace collapsed to single spaces.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Element text with a leading checkbox glyph removed.
pub(crate) fn line_text(element: ElementRef<'_>) -> String {
    let text = element_text(element);
    match text.strip_prefix(CHECKBOX) {
        Some(rest) => rest.trim_start().to_string(),
        None => text,
    }
}

/// Whether the element has `attr` and its value matches `pattern`.
pub(crate) fn attr_matches(element: ElementRef<'_>, attr: &str, pattern: &Regex) -> bool {
    element
        .value()
        .attr(attr)
        .is_some_and(|value| pattern.is_match(value))
}

/// Elements that come after `start` in document order, starting with its descendants.
pub(crate) fn following<'a>(
    document: &'a Html,
    start: ElementRef<'a>,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    let start_id = start.id();
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .skip_while(move |element| element.id() != start_id)
        .skip(1)
}

/// First element named `tag` inside or after `start`.
pub(crate) fn first_following<'a>(
    document: &'a Html,
    start: ElementRef<'a>,
    tag: &str,
) -> Option<ElementRef<'a>> {
    following(document, start).find(|element| element.value().name() == tag)
}

/// Parent element, if the node has one.
pub(crate) fn parent_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.parent().and_then(ElementRef::wrap)
}

/// Headings whose lower-cased text contains any of `keywords`.
pub(crate) fn headings_containing<'a>(document: &'a Html, keywords: &[&str]) -> Vec<ElementRef<'a>> {
    document
        .select(&HEADING_SELECTOR)
        .filter(|heading| {
            let text = element_text(*heading).to_lowercase();
            keywords.iter().any(|keyword| text.contains(keyword))
        })
        .collect()
}

/// Drop empty lines and repeats, keeping the first occurrence of each.
pub(crate) fn dedup_in_order(lines: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    lines
        .into_iter()
        .filter(|line| !line.is_empty() && seen.insert(line.clone()))
        .collect()
}

/// Walk from each heading's parent to the first `tag` list and collect its items.
///
/// Items are deduplicated across all headings, in document order.
pub(crate) fn lists_after_headings(document: &Html, keywords: &[&str], tag: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for heading in headings_containing(document, keywords) {
        let Some(parent) = parent_element(heading) else {
            continue;
        };
        if let Some(list) = first_following(document, parent, tag) {
            lines.extend(list.select(&LI_SELECTOR).map(line_text));
        }
    }

    dedup_in_order(lines)
}
