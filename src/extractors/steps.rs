use regex::Regex;
use std::sync::LazyLock;

use super::dom::{attr_matches, dedup_in_order, line_text, lists_after_headings, LI_SELECTOR, P_LI_SELECTOR};
use super::{FallbackChain, ListStrategy, ParsingContext};

static STEP_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)instruction|direction|step").expect("valid regex"));

/// Verbs that show up in real method text; a labelled list without any of
/// them is usually navigation or a "next steps" widget.
const COOKING_ACTIONS: &[&str] = &[
    "heat", "preheat", "saute", "stir", "simmer", "remove", "serve", "garnish", "pour", "mix",
    "bake", "grill", "boil", "chop", "slice", "dice", "cool", "prepare", "melt", "transfer",
    "refrigerate", "reheat", "arrange", "whisk", "blend", "fry", "marinate", "combine", "drizzle",
    "sprinkle", "toss", "fold", "cover", "let stand", "beat", "brush", "shape", "spray", "roll",
    "cut", "spread", "dip", "top with", "squeeze", "shake", "divide", "whip", "knead", "grate",
    "baste", "pound", "set", "mash", "dry", "wait", "season", "start", "cook",
];

const STEP_HEADINGS: &[&str] = &["directions", "instructions", "method", "how to make"];

/// Steps marked up with an instruction/direction/step id or class.
pub struct LabelledSteps;

impl ListStrategy for LabelledSteps {
    fn name(&self) -> &str {
        "labelled steps"
    }

    fn extract(&self, context: &ParsingContext) -> Vec<String> {
        let document = &context.document;
        let by_id = document
            .select(&LI_SELECTOR)
            .filter(|li| attr_matches(*li, "id", &STEP_LABEL));
        let by_class = document
            .select(&P_LI_SELECTOR)
            .filter(|el| attr_matches(*el, "class", &STEP_LABEL));

        let steps = dedup_in_order(by_id.chain(by_class).map(line_text));

        if has_cooking_action(&steps) {
            steps
        } else {
            Vec::new()
        }
    }
}

/// The first ordered list after a "Directions"/"Method"-style heading.
pub struct HeadingSteps;

impl ListStrategy for HeadingSteps {
    fn name(&self) -> &str {
        "heading steps"
    }

    fn extract(&self, context: &ParsingContext) -> Vec<String> {
        lists_after_headings(&context.document, STEP_HEADINGS, "ol")
    }
}

fn has_cooking_action(steps: &[String]) -> bool {
    steps.iter().any(|step| {
        let lower = step.to_lowercase();
        COOKING_ACTIONS.iter().any(|word| lower.contains(word))
    })
}

/// Extract the method steps, trying labelled markup before heading lookup.
pub fn extract_steps(context: &ParsingContext) -> Vec<String> {
    FallbackChain::new(vec![Box::new(LabelledSteps), Box::new(HeadingSteps)]).extract(context)
}
