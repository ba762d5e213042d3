//! Recipe suggestions from a list of ingredients.
//!
//! The service asks an OpenAI-compatible completion endpoint for a few recipes,
//! cuts the free-text answer into [`model::RecipeRecord`]s and appends the raw
//! exchange to a SQLite audit table.

pub mod config;
pub mod controllers;
pub mod error;
pub mod extractors;
pub mod model;
pub mod pipelines;
pub mod providers;
pub mod server;
pub mod storage;

pub use config::AppConfig;
pub use error::AppError;
pub use extractors::extract_recipes;
pub use model::{GenerateRequest, GenerateResponse, LogEntry, RecipeRecord};
pub use pipelines::generate_recipes;
pub use providers::{build_recipe_prompt, CompletionProvider, OpenAICompatibleProvider};
pub use storage::{LogStore, SqliteLogStore};
