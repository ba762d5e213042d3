pub mod diagnostics_controller;
pub mod recipe_controller;
