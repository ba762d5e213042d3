use crate::config::ProviderConfig;
use crate::providers::{CompletionProvider, ProviderError};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Client for any OpenAI-compatible `/v1/chat/completions` endpoint (Groq by default)
pub struct OpenAICompatibleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAICompatibleProvider {
    /// Create a new provider from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(ProviderError::MissingApiKey("GROQ_API_KEY"))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(OpenAICompatibleProvider {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let timeout = Duration::from_secs(ProviderConfig::default().timeout);
        OpenAICompatibleProvider {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_key,
            base_url,
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 800,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAICompatibleProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "user", "content": prompt}
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens
            }))
            .send()
            .await?;

        // Only 200 counts as success; other 2xx codes are upstream errors
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await?;
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);
        let content = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                ProviderError::MalformedResponse(
                    "missing choices[0].message.content".to_string(),
                )
            })?;

        Ok(content.trim().to_string())
    }
}
