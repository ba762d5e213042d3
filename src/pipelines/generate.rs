use log::{error, info, warn};

use crate::error::{AppError, Result};
use crate::extractors::extract_recipes;
use crate::model::{join_ingredients, RecipeRecord};
use crate::providers::{build_recipe_prompt, CompletionProvider};
use crate::storage::LogStore;

/// Run one generation request end to end.
///
/// prompt -> completion -> extraction -> log row. Recipes are only returned
/// once the log row has been written.
pub async fn generate_recipes(
    provider: &dyn CompletionProvider,
    store: &dyn LogStore,
    ingredients: &[String],
) -> Result<Vec<RecipeRecord>> {
    if ingredients.is_empty() {
        warn!("Rejected request without ingredients");
        return Err(AppError::NoIngredients);
    }

    let prompt = build_recipe_prompt(ingredients);

    info!("Sending request to {}...", provider.provider_name());
    let content = provider.complete(&prompt).await.map_err(|e| {
        error!("Completion request failed: {}", e);
        AppError::from(e)
    })?;

    let recipes = extract_recipes(&content, ingredients);

    info!("Inserting into recipe_logs...");
    store
        .append(&join_ingredients(ingredients), &content)
        .await
        .map_err(|e| {
            error!("Database error: {}", e);
            AppError::from(e)
        })?;

    info!("Generated {} recipes", recipes.len());
    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LogEntry;
    use crate::providers::ProviderError;
    use crate::storage::{StorageError, StorageResult};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct CannedProvider(std::result::Result<String, u16>);

    #[async_trait]
    impl CompletionProvider for CannedProvider {
        fn provider_name(&self) -> &str {
            "canned"
        }

        async fn complete(&self, _prompt: &str) -> std::result::Result<String, ProviderError> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(ProviderError::Status {
                    status: *status,
                    body: "upstream body".to_string(),
                }),
            }
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        rows: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    #[async_trait]
    impl LogStore for MemoryStore {
        async fn init(&self) -> StorageResult<()> {
            Ok(())
        }

        async fn append(&self, ingredients: &str, result_text: &str) -> StorageResult<i64> {
            if self.fail {
                return Err(StorageError::Task("disk full".to_string()));
            }
            let mut rows = self.rows.lock().unwrap();
            rows.push((ingredients.to_string(), result_text.to_string()));
            Ok(rows.len() as i64)
        }

        async fn recent(&self, _limit: usize) -> StorageResult<Vec<LogEntry>> {
            Ok(Vec::new())
        }
    }

    fn ingredients() -> Vec<String> {
        vec!["egg".to_string(), "rice".to_string()]
    }

    #[tokio::test]
    async fn test_generate_logs_raw_completion() {
        let provider = CannedProvider(Ok("**Recipe 1: Fried Rice\nFry.".to_string()));
        let store = MemoryStore::default();

        let recipes = generate_recipes(&provider, &store, &ingredients())
            .await
            .unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Recipe 1: Fried Rice");
        let rows = store.rows.lock().unwrap();
        assert_eq!(
            *rows,
            vec![(
                "egg, rice".to_string(),
                "**Recipe 1: Fried Rice\nFry.".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_ingredients() {
        let provider = CannedProvider(Ok("unused".to_string()));
        let store = MemoryStore::default();

        let result = generate_recipes(&provider, &store, &[]).await;
        assert!(matches!(result, Err(AppError::NoIngredients)));
        assert!(store.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generate_upstream_error_skips_logging() {
        let provider = CannedProvider(Err(502));
        let store = MemoryStore::default();

        let result = generate_recipes(&provider, &store, &ingredients()).await;
        match result {
            Err(AppError::Upstream { status, details }) => {
                assert_eq!(status, 502);
                assert_eq!(details, "upstream body");
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
        assert!(store.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generate_fails_whole_request_on_storage_error() {
        let provider = CannedProvider(Ok("**Recipe 1: Congee\nSimmer.".to_string()));
        let store = MemoryStore {
            fail: true,
            ..MemoryStore::default()
        };

        let result = generate_recipes(&provider, &store, &ingredients()).await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
