use crate::models::{Mood, SearchQuery};
use crate::ports::language_model::LanguageModel;

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("The language model could not be reached.")]
    Unavailable(color_eyre::Report),
    #[error("The language model could not generate a valid search query for the given mood.")]
    GenerationFailed,
}

/// Instruction sent to the model; `{mood}` is replaced with the user's mood.
pub fn build_prompt(mood: &Mood) -> String {
    let mood = mood.as_str();
    format!(
        r#"
Based on the mood or activity: "{mood}", generate a concise and effective search query string to find relevant tracks on Spotify.
The query could be a combination of genres, artists, descriptive terms, or even a fictional playlist title.
Return ONLY the search query string. Do not include any other text, labels, or explanations.

Examples:
- Mood: "rainy day focus" -> Query: "lo-fi beats for studying"
- Mood: "80s retro party" -> Query: "80s synth-pop hits"
- Mood: "feeling adventurous and epic" -> Query: "epic orchestral film score"
"#
    )
}

/// Turns a mood into a catalog search query via the language model.
pub struct QuerySynthesizer<L: LanguageModel> {
    model: L,
}

impl<L: LanguageModel> QuerySynthesizer<L> {
    pub fn new(model: L) -> Self {
        Self { model }
    }

    pub async fn synthesize(&self, mood: &Mood) -> Result<SearchQuery, SynthesisError> {
        let text = self
            .model
            .generate_text(&build_prompt(mood))
            .await
            .map_err(SynthesisError::Unavailable)?;

        let query = SearchQuery::from_generated(&text).ok_or(SynthesisError::GenerationFailed)?;
        tracing::info!(%query, "Generated search query");
        Ok(query)
    }
}
