//! Gemini client implementation

use async_trait::async_trait;
use reqwest::Client;

use crate::llm::error::LlmError;
use crate::llm::provider::Generator;

use super::types::{GenerateContentRequest, GenerateContentResponse};

/// Gemini model identifiers
#[derive(Debug, Clone)]
pub enum GeminiModel {
    /// Gemini 2.5 Pro
    Gemini25Pro,
    /// Gemini 2.5 Flash
    Gemini25Flash,
    /// Gemini 2.5 Flash Lite
    Gemini25FlashLite,
}

impl GeminiModel {
    /// Get the model identifier string
    pub fn as_str(&self) -> &str {
        match self {
            GeminiModel::Gemini25Pro => "gemini-2.5-pro",
            GeminiModel::Gemini25Flash => "gemini-2.5-flash",
            GeminiModel::Gemini25FlashLite => "gemini-2.5-flash-lite",
        }
    }
}

/// Client for the Generative Language API
pub struct GeminiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API key for the Generative Language API
    api_key: String,
    /// Model to use
    model: GeminiModel,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// # Arguments
    ///
    /// * `api_key` - Generative Language API key
    /// * `model` - Gemini model to use
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: String, model: GeminiModel) -> Result<Self, LlmError> {
        let http_client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .map_err(|e| LlmError::HttpError {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            api_key,
            model,
        })
    }

    /// Build the endpoint URL for content generation
    fn build_endpoint_url(&self) -> String {
        format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model.as_str()
        )
    }

    /// Make a generateContent request to Gemini
    async fn make_request(&self, request: GenerateContentRequest) -> Result<String, LlmError> {
        let url = self.build_endpoint_url();
        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        // Check status
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(LlmError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateContentResponse = response.json().await?;

        body.text().ok_or_else(|| LlmError::ProviderError {
            code: "empty_response".to_string(),
            message: "Response contained no candidate text".to_string(),
        })
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.make_request(GenerateContentRequest::from_prompt(prompt))
            .await
    }
}
