/// Build the user prompt asking for recipe suggestions.
///
/// Ingredients keep their original order; a single ingredient is fine.
pub fn build_recipe_prompt(ingredients: &[String]) -> String {
    format!(
        "Suggest 4 simple, affordable recipes using: {}. \
         For each recipe, include a title, an ingredients list, and instructions.",
        crate::model::join_ingredients(ingredients)
    )
}
