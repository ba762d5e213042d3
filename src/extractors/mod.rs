mod recipe_split;

pub use self::recipe_split::{extract_recipes, split_in_half, MAX_TITLE_CHARS};
