use color_eyre::eyre::Result;

/// Port trait wrapping a text-generation model.
///
/// Implementations live in `services::language_model` (production) or test mocks.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LanguageModel: Send + Sync {
    /// Submit `prompt` and return the raw generated text, untrimmed.
    async fn generate_text(&self, prompt: &str) -> Result<String>;
}
