use log::{error, info};

use recipe_suggest::{server, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Local .env is optional; deployments set real environment variables
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load()?;
    info!(
        "Using model {} at {}, database {}",
        config.provider.model,
        config.provider.base_url,
        config.database.path.display()
    );

    if let Err(e) = server::run(config).await {
        error!("{}", e);
        return Err(e.into());
    }

    Ok(())
}
