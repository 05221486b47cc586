use color_eyre::eyre::Result;

use crate::models::AccessToken;

/// Decoupled representation of a catalog track from the search API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogTrack {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    pub duration_ms: u64,
    pub album_name: String,
    /// In the order the catalog lists them, largest first for Spotify
    pub album_image_urls: Vec<String>,
    pub external_url: Option<String>,
}

/// Port trait wrapping the catalog API capabilities used by business logic.
///
/// Implementations live in `services::catalog::client` (production) or test mocks.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// Client-credentials grant; a fresh token every call.
    async fn request_access_token(&self) -> Result<AccessToken>;

    async fn search_tracks(
        &self,
        token: &AccessToken,
        query: &str,
        limit: u32,
    ) -> Result<Vec<CatalogTrack>>;
}
