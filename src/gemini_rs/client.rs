use url::Url;

use crate::gemini_rs::types::{GenerateContentRequest, GenerateContentResponse};

#[derive(Debug, thiserror::Error)]
pub enum GenerateContentError {
    #[error("Gemini rejected the request: {reason}")]
    Rejected { reason: String },
    #[error("Failed to send http request: {0}")]
    FailedToSendRequest(reqwest::Error),
    #[error("Failed to parse response: {0}")]
    FailedToParseResponse(reqwest::Error),
}

/// Google Generative Language API client for a single model
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(client: reqwest::Client, base_url: Url, api_key: String, model: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.as_str().trim_end_matches('/'),
            self.model
        )
    }

    /// https://ai.google.dev/api/generate-content#method:-models.generatecontent
    pub async fn generate_content(
        &self,
        prompt: &str,
    ) -> Result<GenerateContentResponse, GenerateContentError> {
        let response = self
            .client
            .post(self.generate_content_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(GenerateContentError::FailedToSendRequest)?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(GenerateContentError::Rejected {
                reason: format!(
                    "{status}: {}",
                    response
                        .text()
                        .await
                        .unwrap_or("Failed to get error text".to_string())
                ),
            });
        }

        response
            .json()
            .await
            .map_err(GenerateContentError::FailedToParseResponse)
    }
}
