use crate::models::{Mood, MoodError, PlaylistResponse};
use crate::ports::catalog::CatalogClient;
use crate::ports::language_model::LanguageModel;
use crate::services::catalog::{CatalogError, CatalogFetcher};
use crate::services::query_synthesizer::{QuerySynthesizer, SynthesisError};

#[derive(Debug, thiserror::Error)]
pub enum PlaylistError {
    #[error(transparent)]
    InvalidMood(#[from] MoodError),
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl PlaylistError {
    /// Stage name for server-side logs; clients only see 400 vs 500.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::InvalidMood(_) => "validation",
            Self::Synthesis(_) => "synthesis",
            Self::Catalog(CatalogError::Authentication(_)) => "authentication",
            Self::Catalog(CatalogError::Search(_)) => "search",
        }
    }
}

/// Mood -> search query -> tracks.
pub struct PlaylistService<L: LanguageModel, C: CatalogClient> {
    synthesizer: QuerySynthesizer<L>,
    fetcher: CatalogFetcher<C>,
}

impl<L: LanguageModel, C: CatalogClient> PlaylistService<L, C> {
    pub fn new(synthesizer: QuerySynthesizer<L>, fetcher: CatalogFetcher<C>) -> Self {
        Self {
            synthesizer,
            fetcher,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn generate(&self, raw_mood: Option<&str>) -> Result<PlaylistResponse, PlaylistError> {
        let mood = Mood::parse(raw_mood)?;
        let query = self.synthesizer.synthesize(&mood).await?;
        let tracks = self.fetcher.fetch(&query).await?;
        tracing::info!(%query, tracks = tracks.len(), "Generated playlist");
        Ok(PlaylistResponse { tracks })
    }
}
