use color_eyre::eyre::{Result, WrapErr};

use crate::config::{CatalogConfig, Credentials};
use crate::models::AccessToken;
use crate::ports::catalog::{CatalogClient, CatalogTrack};
use crate::spotify_rs::auth::request_client_credentials_token;
use crate::spotify_rs::client::SpotifyClient;
use crate::spotify_rs::types::SpotifyTrack;

pub struct SpotifyHttpAdapter {
    client: reqwest::Client,
    config: CatalogConfig,
    client_id: String,
    client_secret: String,
}

impl SpotifyHttpAdapter {
    pub fn new(client: reqwest::Client, config: CatalogConfig, credentials: &Credentials) -> Self {
        Self {
            client,
            config,
            client_id: credentials.spotify_client_id.clone(),
            client_secret: credentials.spotify_client_secret.clone(),
        }
    }
}

impl From<SpotifyTrack> for CatalogTrack {
    fn from(track: SpotifyTrack) -> Self {
        Self {
            id: track.id,
            name: track.name,
            artists: track.artists.into_iter().map(|artist| artist.name).collect(),
            duration_ms: track.duration_ms,
            album_name: track.album.name,
            album_image_urls: track.album.images.into_iter().map(|image| image.url).collect(),
            external_url: track.external_urls.spotify,
        }
    }
}

#[async_trait::async_trait]
impl CatalogClient for SpotifyHttpAdapter {
    async fn request_access_token(&self) -> Result<AccessToken> {
        let token = request_client_credentials_token(
            &self.client,
            &self.config.token_url,
            &self.client_id,
            &self.client_secret,
        )
        .await
        .wrap_err("Spotify client-credentials exchange failed")?;
        tracing::debug!(expires_in = token.expires_in, "Fetched Spotify access token");
        Ok(AccessToken::new(token.access_token))
    }

    async fn search_tracks(
        &self,
        token: &AccessToken,
        query: &str,
        limit: u32,
    ) -> Result<Vec<CatalogTrack>> {
        let tracks = SpotifyClient::new(&self.client, &self.config.api_base_url, token.secret())
            .search_tracks(query, limit)
            .await
            .wrap_err_with(|| format!("Spotify track search failed for query {query:?}"))?;
        Ok(tracks.into_iter().map(CatalogTrack::from).collect())
    }
}
