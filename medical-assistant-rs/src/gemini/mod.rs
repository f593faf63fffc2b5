//! Gemini API client
//!
//! Implements [`TextGenerator`] against the `generateContent` endpoint.
//! A single attempt is made per call; failures are classified and
//! handed back to the caller.

mod models;
pub use models::*;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::GeminiConfig;
use crate::error::{ConfigError, GenerationError, GenerationResult};
use crate::generator::{SamplingParams, TextGenerator};

/// Header carrying the API key; keeps it out of URLs and error texts
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini `generateContent` client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http_client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ConfigError> {
        let http_client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        if !config.is_configured() {
            log::warn!("GEMINI_API_KEY is not set; every question will get the configuration notice");
        }

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    fn build_request(&self, prompt: &str, sampling: &SamplingParams) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
            generation_config: GenerationConfig {
                temperature: sampling.temperature,
                top_k: sampling.top_k,
                top_p: sampling.top_p,
                max_output_tokens: sampling
                    .max_output_tokens
                    .unwrap_or(self.config.max_output_tokens),
            },
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    async fn generate(&self, prompt: &str, sampling: &SamplingParams) -> GenerationResult<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)?;

        let request_body = self.build_request(prompt, sampling);
        log::info!(
            "Sending generateContent request to {} (model: {})",
            self.config.base_url,
            self.config.model
        );

        let response = self
            .http_client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GenerationError::from_status(status.as_u16(), &text));
        }

        let data: GenerateContentResponse = response.json().await.map_err(|e| {
            GenerationError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        if let Some(total) = data.usage_metadata.as_ref().and_then(|u| u.total_token_count) {
            log::debug!("Gemini request completed. Used {} tokens", total);
        }

        match data.first_text().map(str::trim) {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(GenerationError::InvalidResponse(
                "No candidate text in response".to_string(),
            )),
        }
    }
}
