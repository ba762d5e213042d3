use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Top-level service configuration.
///
/// Built once at start-up and shared read-only with every request handler.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Completion service settings
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Log table settings
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Configuration for the OpenAI-compatible completion endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Base URL; `/v1/chat/completions` is appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier (e.g., "llama-3.1-8b-instant")
    #[serde(default = "default_model")]
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key for authentication (can also be set via GROQ_API_KEY)
    pub api_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            timeout: default_timeout(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// SQLite database file holding the `recipe_logs` table
    #[serde(default = "default_database_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_base_url() -> String {
    "https://api.groq.com/openai".to_string()
}

fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    800
}

fn default_timeout() -> u64 {
    60
}

fn default_database_path() -> PathBuf {
    PathBuf::from("recipe_db.sqlite3")
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. PORT, DATABASE_URL and GROQ_API_KEY deployment variables
    /// 2. Environment variables with RECIPE_SUGGEST__ prefix
    /// 3. config.toml file in current directory
    /// 4. Default values
    ///
    /// Environment variable format: RECIPE_SUGGEST__PROVIDER__MODEL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables. See [`AppConfig::load`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let port = match env::var("PORT") {
        Ok(raw) => Some(
            raw.parse::<u16>()
                .map_err(|e| ConfigError::Message(format!("invalid PORT '{raw}': {e}")))?,
        ),
        Err(_) => None,
    };

    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_SUGGEST__SERVER__PORT
        .add_source(
            Environment::with_prefix("RECIPE_SUGGEST")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("server.port", port.map(i64::from))?
        .set_override_option(
            "database.path",
            env::var("DATABASE_URL").ok().map(|url| database_path_from_url(&url)),
        )?
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;
    if config.provider.api_key.is_none() {
        config.provider.api_key = env::var("GROQ_API_KEY").ok();
    }

    Ok(config)
}

/// Accepts `sqlite://<path>`, `sqlite:<path>` or a bare path.
fn database_path_from_url(url: &str) -> String {
    url.strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_port(), 5000);
        assert_eq!(default_model(), "llama-3.1-8b-instant");
        assert_eq!(default_temperature(), 0.7);
        assert_eq!(default_max_tokens(), 800);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = from_toml("");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.provider.base_url, "https://api.groq.com/openai");
        assert!(config.provider.api_key.is_none());
        assert_eq!(config.database.path, PathBuf::from("recipe_db.sqlite3"));
    }

    #[test]
    fn test_partial_sections_keep_remaining_defaults() {
        let config = from_toml(
            r#"
            [server]
            port = 8080

            [provider]
            model = "llama-3.3-70b-versatile"
            api_key = "test-key"
            "#,
        );

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.provider.model, "llama-3.3-70b-versatile");
        assert_eq!(config.provider.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.provider.max_tokens, 800);
        assert_eq!(config.provider.timeout, 60);
    }

    #[test]
    fn test_database_path_from_url() {
        assert_eq!(database_path_from_url("sqlite:///var/lib/r.db"), "/var/lib/r.db");
        assert_eq!(database_path_from_url("sqlite:recipes.db"), "recipes.db");
        assert_eq!(database_path_from_url("data/recipes.db"), "data/recipes.db");
    }
}
