use crate::ports::catalog::CatalogClient;
use crate::ports::language_model::LanguageModel;
use crate::services::playlist::PlaylistService;

/// Read-only state shared by every request.
pub struct AppState<L: LanguageModel, C: CatalogClient> {
    pub playlist_service: PlaylistService<L, C>,
}
