pub mod catalog;
pub mod language_model;
pub mod playlist;
pub mod query_synthesizer;

use color_eyre::eyre::{Result, WrapErr};

use crate::config::{Config, Credentials};
use crate::services::catalog::{CatalogFetcher, client::SpotifyHttpAdapter};
use crate::services::language_model::LanguageModelAdapter;
use crate::services::playlist::PlaylistService;
use crate::services::query_synthesizer::QuerySynthesizer;

pub type DefaultPlaylistService = PlaylistService<LanguageModelAdapter, SpotifyHttpAdapter>;

/// Shared client for the Gemini and Spotify adapters. Only carries a timeout when one is configured.
fn build_http_client(config: &Config) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.http_timeout() {
        builder = builder.timeout(timeout);
    }
    builder.build().wrap_err("Failed to build HTTP client")
}

/// Wire the production adapters together. Fails if a required credential is missing.
pub fn build_playlist_service(
    config: &Config,
    credentials: &Credentials,
) -> Result<DefaultPlaylistService> {
    let http = build_http_client(config)?;

    let language_model =
        LanguageModelAdapter::from_config(&config.language_model, credentials, http.clone())?;
    let catalog = SpotifyHttpAdapter::new(http, config.catalog.clone(), credentials);

    Ok(PlaylistService::new(
        QuerySynthesizer::new(language_model),
        CatalogFetcher::new(catalog, config.catalog.placeholder_album_art.clone()),
    ))
}
