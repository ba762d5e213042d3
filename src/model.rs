use serde::{Deserialize, Serialize};

/// One suggested recipe, built per request and never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeRecord {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
}

/// Body of `POST /generate`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Body of a successful `POST /generate`
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub recipes: Vec<RecipeRecord>,
}

/// One audit row of the `recipe_logs` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub id: i64,
    pub ingredients: String,
    pub result_text: String,
    /// Formatted as `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,
}

/// Joins ingredients the way they appear in prompts, records and log rows.
pub fn join_ingredients(ingredients: &[String]) -> String {
    ingredients.join(", ")
}
