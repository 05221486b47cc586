pub mod client;

use crate::models::{SearchQuery, TrackRecord};
use crate::ports::catalog::{CatalogClient, CatalogTrack};

/// Number of tracks requested from the catalog. Only the first page is used.
pub const SEARCH_PAGE_SIZE: u32 = 20;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to authenticate with Spotify.")]
    Authentication(color_eyre::Report),
    #[error("Failed to search Spotify for tracks.")]
    Search(color_eyre::Report),
}

/// Normalize a catalog search result into a display-ready record.
pub fn normalize_track(track: CatalogTrack, placeholder_album_art: &str) -> TrackRecord {
    let album_art = track
        .album_image_urls
        .into_iter()
        .find(|url| !url.is_empty())
        .unwrap_or_else(|| placeholder_album_art.to_string());

    TrackRecord {
        id: track.id,
        name: track.name,
        artists: track.artists.join(", "),
        duration: track.duration_ms,
        album_name: track.album_name,
        album_art,
        url: track.external_url,
    }
}

/// Authenticate, search, normalize. Strictly sequential, no retries.
pub struct CatalogFetcher<C: CatalogClient> {
    client: C,
    placeholder_album_art: String,
}

impl<C: CatalogClient> CatalogFetcher<C> {
    pub fn new(client: C, placeholder_album_art: String) -> Self {
        Self {
            client,
            placeholder_album_art,
        }
    }

    pub async fn fetch(&self, query: &SearchQuery) -> Result<Vec<TrackRecord>, CatalogError> {
        let token = self
            .client
            .request_access_token()
            .await
            .map_err(CatalogError::Authentication)?;

        let tracks = self
            .client
            .search_tracks(&token, query.as_str(), SEARCH_PAGE_SIZE)
            .await
            .map_err(CatalogError::Search)?;

        tracing::debug!(count = tracks.len(), "Catalog search returned tracks");

        Ok(tracks
            .into_iter()
            .map(|track| normalize_track(track, &self.placeholder_album_art))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccessToken, DEFAULT_PLACEHOLDER_ALBUM_ART};
    use crate::ports::catalog::MockCatalogClient;

    fn catalog_track(id: &str, artists: &[&str], images: &[&str]) -> CatalogTrack {
        CatalogTrack {
            id: id.to_string(),
            name: format!("Track {id}"),
            artists: artists.iter().map(|a| a.to_string()).collect(),
            duration_ms: 185_000,
            album_name: "Album".to_string(),
            album_image_urls: images.iter().map(|i| i.to_string()).collect(),
            external_url: Some(format!("https://open.spotify.com/track/{id}")),
        }
    }

    fn query(text: &str) -> SearchQuery {
        SearchQuery::from_generated(text).unwrap()
    }

    #[test]
    fn test_normalize_joins_artists() {
        let record = normalize_track(
            catalog_track("1", &["A", "B"], &["https://img/1"]),
            DEFAULT_PLACEHOLDER_ALBUM_ART,
        );
        assert_eq!(record.artists, "A, B");

        let single = normalize_track(catalog_track("2", &["Solo"], &[]), "p");
        assert_eq!(single.artists, "Solo");
    }

    #[test]
    fn test_normalize_takes_first_image() {
        let record = normalize_track(
            catalog_track("1", &["A"], &["https://img/640", "https://img/300"]),
            DEFAULT_PLACEHOLDER_ALBUM_ART,
        );
        assert_eq!(record.album_art, "https://img/640");
    }

    #[test]
    fn test_normalize_missing_art_uses_placeholder() {
        let record = normalize_track(catalog_track("1", &["A"], &[]), DEFAULT_PLACEHOLDER_ALBUM_ART);
        assert_eq!(record.album_art, DEFAULT_PLACEHOLDER_ALBUM_ART);

        let blank = normalize_track(catalog_track("2", &["A"], &[""]), DEFAULT_PLACEHOLDER_ALBUM_ART);
        assert_eq!(blank.album_art, DEFAULT_PLACEHOLDER_ALBUM_ART);
    }

    #[test]
    fn test_normalize_passes_fields_through() {
        let record = normalize_track(catalog_track("xyz", &["A"], &["u"]), "p");
        assert_eq!(record.id, "xyz");
        assert_eq!(record.name, "Track xyz");
        assert_eq!(record.duration, 185_000);
        assert_eq!(record.album_name, "Album");
        assert_eq!(
            record.url.as_deref(),
            Some("https://open.spotify.com/track/xyz")
        );
    }

    #[tokio::test]
    async fn test_fetch_preserves_catalog_order() {
        let mut client = MockCatalogClient::new();
        client
            .expect_request_access_token()
            .times(1)
            .returning(|| Ok(AccessToken::new("token".into())));
        client
            .expect_search_tracks()
            .withf(|token, query, limit| {
                token.secret() == "token" && query == "lo-fi beats" && *limit == SEARCH_PAGE_SIZE
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(vec![
                    catalog_track("b", &["B"], &[]),
                    catalog_track("a", &["A"], &[]),
                    catalog_track("b", &["B"], &[]),
                ])
            });

        let records = CatalogFetcher::new(client, DEFAULT_PLACEHOLDER_ALBUM_ART.into())
            .fetch(&query("lo-fi beats"))
            .await
            .unwrap();

        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "b"]);
    }

    #[tokio::test]
    async fn test_fetch_authentication_failure_skips_search() {
        let mut client = MockCatalogClient::new();
        client
            .expect_request_access_token()
            .times(1)
            .returning(|| Err(color_eyre::eyre::eyre!("invalid_client")));
        client.expect_search_tracks().never();

        let error = CatalogFetcher::new(client, DEFAULT_PLACEHOLDER_ALBUM_ART.into())
            .fetch(&query("lo-fi beats"))
            .await
            .unwrap_err();

        assert!(matches!(error, CatalogError::Authentication(_)));
        assert_eq!(error.to_string(), "Failed to authenticate with Spotify.");
    }

    #[tokio::test]
    async fn test_fetch_search_failure() {
        let mut client = MockCatalogClient::new();
        client
            .expect_request_access_token()
            .returning(|| Ok(AccessToken::new("token".into())));
        client
            .expect_search_tracks()
            .returning(|_, _, _| Err(color_eyre::eyre::eyre!("502 Bad Gateway")));

        let error = CatalogFetcher::new(client, DEFAULT_PLACEHOLDER_ALBUM_ART.into())
            .fetch(&query("lo-fi beats"))
            .await
            .unwrap_err();

        assert!(matches!(error, CatalogError::Search(_)));
    }
}
