//! Splits free-form completion text into titled recipe records.
//!
//! The completion service is asked for several recipes but answers in prose,
//! so records are recovered by cutting the text at "Recipe N:" headings.
//! Text without any usable segment falls back to two halves.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::model::{join_ingredients, RecipeRecord};

/// Raw title fragments are cut to this many characters before numbering.
pub const MAX_TITLE_CHARS: usize = 50;

const FALLBACK_TITLE: &str = "AI Recipe Suggestions";

/// Either `**Recipe <n>:` anywhere or `Recipe <n>:` right after a newline.
static RECIPE_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\*\*Recipe \d+:|\nRecipe \d+:)").expect("Invalid recipe marker regex")
});

/// Turn one completion into an ordered, non-empty list of recipes.
///
/// Every record carries the full ingredient list; titles are renumbered from 1
/// in the order segments appear, whatever numbers the markers used.
pub fn extract_recipes(completion: &str, ingredients: &[String]) -> Vec<RecipeRecord> {
    let joined = join_ingredients(ingredients);

    let recipes: Vec<RecipeRecord> = RECIPE_MARKER_REGEX
        .split(completion)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .enumerate()
        .map(|(index, segment)| {
            let (first_line, body) = segment.split_once('\n').unwrap_or((segment, ""));
            let title: String = first_line.chars().take(MAX_TITLE_CHARS).collect();
            RecipeRecord {
                title: format!("Recipe {}: {}", index + 1, title),
                ingredients: joined.clone(),
                instructions: body.trim().to_string(),
            }
        })
        .collect();

    if !recipes.is_empty() {
        return recipes;
    }

    debug!("No recipe segments found, splitting completion in half");
    let (first, second) = split_in_half(completion);
    vec![
        RecipeRecord {
            title: format!("{FALLBACK_TITLE} (Part 1)"),
            ingredients: joined.clone(),
            instructions: first.to_string(),
        },
        RecipeRecord {
            title: format!("{FALLBACK_TITLE} (Part 2)"),
            ingredients: joined,
            instructions: second.to_string(),
        },
    ]
}

/// Split at the middle character (count / 2), ignoring word and line boundaries.
pub fn split_in_half(text: &str) -> (&str, &str) {
    let half = text.chars().count() / 2;
    let offset = text
        .char_indices()
        .nth(half)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len());
    text.split_at(offset)
}
