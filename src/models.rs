use std::fmt;

use serde::{Deserialize, Serialize};

/// Album art used when the catalog returns no images for a track's album.
pub const DEFAULT_PLACEHOLDER_ALBUM_ART: &str = "https://via.placeholder.com/150";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoodError {
    #[error("Mood prompt is required.")]
    Missing,
}

/// A user's free-text description of what they want to listen to.
///
/// Always non-empty and trimmed. The only way to build one is [`Mood::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mood(String);

impl Mood {
    pub fn parse(raw: Option<&str>) -> Result<Self, MoodError> {
        match raw.map(str::trim) {
            Some(mood) if !mood.is_empty() => Ok(Self(mood.to_string())),
            _ => Err(MoodError::Missing),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Catalog search query produced by the language model. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trims the model output, returning `None` if nothing is left.
    pub fn from_generated(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Short-lived catalog bearer token. Fetched fresh for every request.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Display-ready representation of one catalog search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRecord {
    pub id: String,
    pub name: String,
    /// Artist names joined with ", "
    pub artists: String,
    /// Duration in milliseconds
    pub duration: u64,
    pub album_name: String,
    pub album_art: String,
    pub url: Option<String>,
}

impl TrackRecord {
    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistResponse {
    pub tracks: Vec<TrackRecord>,
}

/// Formats milliseconds as `M:SS`, e.g. 185000 -> "3:05".
pub fn format_duration(duration_ms: u64) -> String {
    let minutes = duration_ms / 60_000;
    let seconds = (duration_ms % 60_000) / 1_000;
    format!("{minutes}:{seconds:02}")
}
