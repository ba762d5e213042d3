use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};

use crate::config::AppConfig;
use crate::controllers::{diagnostics_controller, recipe_controller};
use crate::providers::{CompletionProvider, OpenAICompatibleProvider};
use crate::storage::{LogStore, SqliteLogStore};

/// Shared per-process state; read-only after start-up.
pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
    pub store: Arc<dyn LogStore>,
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(recipe_controller::config)
        .configure(diagnostics_controller::config);
}

/// Build state from `config`, make sure the log table exists, and serve until shutdown.
pub async fn run(config: AppConfig) -> Result<(), String> {
    let provider = OpenAICompatibleProvider::new(&config.provider)
        .map_err(|e| format!("Failed to create completion client: {e}"))?;

    let store = SqliteLogStore::new(&config.database.path);
    store
        .init()
        .await
        .map_err(|e| format!("Failed to initialise recipe_logs: {e}"))?;

    let app_state = web::Data::new(AppState {
        provider: Arc::new(provider),
        store: Arc::new(store),
    });

    let address = format!("{}:{}", config.server.host, config.server.port);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(app_config)
    })
    .bind(&address)
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("Serving recipe suggestions on http://{address}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
