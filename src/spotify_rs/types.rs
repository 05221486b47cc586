use serde::{Deserialize, Serialize};

/// Spotify client-credentials token response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyTokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Response of `GET /search?type=track`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifySearchResponse {
    pub tracks: SpotifyTrackPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyTrackPage {
    /// Spotify occasionally returns `null` entries in search results
    pub items: Vec<Option<SpotifyTrack>>,
    pub total: Option<u32>,
}

/// Spotify track from API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyTrack {
    pub id: String,
    pub name: String,
    pub artists: Vec<SpotifyArtist>,
    pub album: SpotifyAlbum,
    pub duration_ms: u64,
    #[serde(default)]
    pub external_urls: SpotifyExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyAlbum {
    pub name: String,
    #[serde(default)]
    pub images: Vec<SpotifyImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyImage {
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpotifyExternalUrls {
    pub spotify: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let body = r#"{
            "tracks": {
                "href": "https://api.spotify.com/v1/search?query=lofi&type=track",
                "items": [
                    {
                        "id": "4uLU6hMCjMI75M1A2tKUQC",
                        "name": "Snowman",
                        "artists": [{ "id": "a1", "name": "WYS" }],
                        "album": {
                            "name": "Snowman",
                            "images": [
                                { "url": "https://i.scdn.co/image/640", "height": 640, "width": 640 },
                                { "url": "https://i.scdn.co/image/300", "height": 300, "width": 300 }
                            ]
                        },
                        "duration_ms": 185000,
                        "external_urls": { "spotify": "https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC" }
                    },
                    null
                ],
                "limit": 20,
                "total": 1
            }
        }"#;

        let response: SpotifySearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.tracks.items.len(), 2);
        let track = response.tracks.items[0].as_ref().unwrap();
        assert_eq!(track.name, "Snowman");
        assert_eq!(track.album.images[0].url, "https://i.scdn.co/image/640");
        assert!(response.tracks.items[1].is_none());
    }

    #[test]
    fn test_parse_track_without_images_or_urls() {
        let body = r#"{
            "id": "x",
            "name": "Untitled",
            "artists": [],
            "album": { "name": "Demo" },
            "duration_ms": 1000
        }"#;

        let track: SpotifyTrack = serde_json::from_str(body).unwrap();
        assert!(track.album.images.is_empty());
        assert!(track.external_urls.spotify.is_none());
    }
}
