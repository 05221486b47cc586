use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;

use crate::http_server::state::AppState;
use crate::models::PlaylistResponse;
use crate::ports::catalog::CatalogClient;
use crate::ports::language_model::LanguageModel;
use crate::services::playlist::PlaylistError;

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratePlaylistInput {
    mood: Option<String>,
}

pub async fn generate_playlist<L, C>(
    State(app_state): State<Arc<AppState<L, C>>>,
    input: Result<Json<GeneratePlaylistInput>, JsonRejection>,
) -> Result<Json<PlaylistResponse>, PlaylistError>
where
    L: LanguageModel + 'static,
    C: CatalogClient + 'static,
{
    // An unreadable body is treated the same as a missing mood
    let mood = match input {
        Ok(Json(input)) => input.mood,
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable playlist request body");
            None
        }
    };

    let playlist = app_state
        .playlist_service
        .generate(mood.as_deref())
        .await?;
    Ok(Json(playlist))
}
