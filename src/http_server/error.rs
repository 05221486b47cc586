use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::services::playlist::PlaylistError;

/// Error body; `error` and `message` carry the same text so either field works for clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    fn new(message: String) -> Self {
        Self {
            error: message.clone(),
            message,
        }
    }
}

// Tell axum how to convert `PlaylistError` into a response.
impl IntoResponse for PlaylistError {
    fn into_response(self) -> Response {
        match &self {
            PlaylistError::InvalidMood(err) => {
                tracing::warn!(stage = self.stage(), "Rejected playlist request: {err}");
                (StatusCode::BAD_REQUEST, Json(ErrorBody::new(err.to_string()))).into_response()
            }
            _ => {
                // Clients can't tell the failing stage apart, the logs can
                tracing::error!(stage = self.stage(), "Playlist generation failed: {self:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::new(format!("Failed to generate playlist. {self}"))),
                )
                    .into_response()
            }
        }
    }
}
