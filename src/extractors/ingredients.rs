use regex::Regex;
use scraper::Selector;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use super::dom::{attr_matches, dedup_in_order, line_text, lists_after_headings, LI_SELECTOR, P_LI_SELECTOR};
use super::{FallbackChain, ListStrategy, ParsingContext};

static INGREDIENT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ingredient").expect("valid regex"));

static CONTAINER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("ol, ul, div").expect("valid container selector"));

/// Items individually labelled as ingredients. Output is sorted.
pub struct LabelledItems;

impl ListStrategy for LabelledItems {
    fn name(&self) -> &str {
        "labelled ingredient items"
    }

    fn extract(&self, context: &ParsingContext) -> Vec<String> {
        let document = &context.document;
        let by_id = document
            .select(&LI_SELECTOR)
            .filter(|li| attr_matches(*li, "id", &INGREDIENT_LABEL));
        let by_class = document
            .select(&P_LI_SELECTOR)
            .filter(|el| attr_matches(*el, "class", &INGREDIENT_LABEL));

        by_id
            .chain(by_class)
            .map(line_text)
            .filter(|line| !line.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// List items inside a container labelled as the ingredient list.
pub struct LabelledContainers;

impl ListStrategy for LabelledContainers {
    fn name(&self) -> &str {
        "labelled ingredient containers"
    }

    fn extract(&self, context: &ParsingContext) -> Vec<String> {
        let items = context
            .document
            .select(&CONTAINER_SELECTOR)
            .filter(|el| attr_matches(*el, "class", &INGREDIENT_LABEL))
            .flat_map(|container| container.select(&LI_SELECTOR).map(line_text).collect::<Vec<_>>());

        dedup_in_order(items)
    }
}

/// The first unordered list after an "Ingredients" heading.
pub struct HeadingLists;

impl ListStrategy for HeadingLists {
    fn name(&self) -> &str {
        "ingredient heading lists"
    }

    fn extract(&self, context: &ParsingContext) -> Vec<String> {
        lists_after_headings(&context.document, &["ingredients"], "ul")
    }
}

/// Extract raw ingredient lines, most specific markup first.
pub fn extract_ingredients(context: &ParsingContext) -> Vec<String> {
    FallbackChain::new(vec![
        Box::new(LabelledItems),
        Box::new(LabelledContainers),
        Box::new(HeadingLists),
    ])
    .extract(context)
}
