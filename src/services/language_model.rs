use color_eyre::eyre::{OptionExt, Result, WrapErr};
use ollama_native::Ollama;
use url::Url;

use crate::config::{Credentials, LanguageModelConfig, LanguageModelProvider};
use crate::gemini_rs::client::GeminiClient;
use crate::ports::language_model::LanguageModel;

pub struct GeminiAdapter {
    client: GeminiClient,
}

impl GeminiAdapter {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl LanguageModel for GeminiAdapter {
    #[tracing::instrument(skip_all, fields(model = %self.client.model()))]
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let response = self
            .client
            .generate_content(prompt)
            .await
            .wrap_err("Gemini generateContent request failed")?;
        tracing::debug!(
            finish_reason = ?response.candidates.first().and_then(|c| c.finish_reason.as_deref()),
            "Gemini responded"
        );
        Ok(response.text())
    }
}

pub struct OllamaAdapter {
    ollama: Ollama,
    model: String,
}

impl OllamaAdapter {
    /// `ollama-native` appends `/api/...` to the url as given and uses its own HTTP client,
    /// so `http_timeout_secs` does not apply here.
    pub fn new(url: &Url, model: String) -> Self {
        Self {
            ollama: Ollama::new(url.as_str().trim_end_matches('/')),
            model,
        }
    }
}

#[async_trait::async_trait]
impl LanguageModel for OllamaAdapter {
    #[tracing::instrument(skip_all, fields(model = %self.model))]
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let response = self
            .ollama
            .generate(self.model.as_str())
            .prompt(prompt)
            .await
            .wrap_err("Ollama generate request failed")?;
        tracing::debug!(done_reason = ?response.done_reason, "Ollama responded");
        Ok(response.response)
    }
}

/// The configured language model backend, chosen once at startup.
pub enum LanguageModelAdapter {
    Gemini(GeminiAdapter),
    Ollama(OllamaAdapter),
}

impl LanguageModelAdapter {
    pub fn from_config(
        config: &LanguageModelConfig,
        credentials: &Credentials,
        http: reqwest::Client,
    ) -> Result<Self> {
        credentials.validate_for(config.provider)?;

        match config.provider {
            LanguageModelProvider::Gemini => {
                let api_key = credentials
                    .gemini_api_key
                    .clone()
                    .ok_or_eyre("GEMINI_API_KEY is not set")?;
                Ok(Self::Gemini(GeminiAdapter::new(GeminiClient::new(
                    http,
                    config.gemini_base_url.clone(),
                    api_key,
                    config.gemini_model.clone(),
                ))))
            }
            LanguageModelProvider::Ollama => Ok(Self::Ollama(OllamaAdapter::new(
                &config.ollama_url,
                config.ollama_model.clone(),
            ))),
        }
    }
}

#[async_trait::async_trait]
impl LanguageModel for LanguageModelAdapter {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        match self {
            Self::Gemini(adapter) => adapter.generate_text(prompt).await,
            Self::Ollama(adapter) => adapter.generate_text(prompt).await,
        }
    }
}
