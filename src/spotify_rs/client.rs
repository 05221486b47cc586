use url::Url;

use crate::spotify_rs::types::{SpotifySearchResponse, SpotifyTrack};

#[derive(Debug, thiserror::Error)]
pub enum SearchTracksError {
    #[error("Search request was rejected: {reason}")]
    Rejected { reason: String },
    #[error("Failed to send http request: {0}")]
    FailedToSendRequest(reqwest::Error),
    #[error("Failed to parse response: {0}")]
    FailedToParseResponse(reqwest::Error),
}

/// Spotify Web API client bound to a single access token
pub struct SpotifyClient<'a> {
    client: &'a reqwest::Client,
    api_base_url: &'a Url,
    access_token: &'a str,
}

impl<'a> SpotifyClient<'a> {
    pub fn new(client: &'a reqwest::Client, api_base_url: &'a Url, access_token: &'a str) -> Self {
        Self {
            client,
            api_base_url,
            access_token,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url.as_str().trim_end_matches('/'), path)
    }

    /// Search the catalog for tracks, returning the first page only.
    /// Null entries in the result page are dropped.
    pub async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<SpotifyTrack>, SearchTracksError> {
        let limit = limit.to_string();
        let response = self
            .client
            .get(self.endpoint("search"))
            .bearer_auth(self.access_token)
            .query(&[
                ("q", query),
                ("type", "track"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(SearchTracksError::FailedToSendRequest)?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(SearchTracksError::Rejected {
                reason: format!(
                    "{status}: {}",
                    response
                        .text()
                        .await
                        .unwrap_or("Failed to get error text".to_string())
                ),
            });
        }

        let page: SpotifySearchResponse = response
            .json()
            .await
            .map_err(SearchTracksError::FailedToParseResponse)?;
        tracing::debug!(total = ?page.tracks.total, "Spotify search page received");

        Ok(page.tracks.items.into_iter().flatten().collect())
    }
}
