use std::collections::HashMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use url::Url;

use crate::spotify_rs::types::SpotifyTokenResponse;

#[derive(Debug, thiserror::Error)]
pub enum ClientCredentialsError {
    #[error("Invalid client credentials: {reason}")]
    InvalidCredentials { reason: String },
    #[error("Failed to send http request: {0}")]
    FailedToSendRequest(reqwest::Error),
    #[error("Failed to parse response: {0}")]
    FailedToParseResponse(reqwest::Error),
}

fn basic_authorization(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", client_id, client_secret))
    )
}

/// Exchange the app's client id and secret for an access token
/// https://developer.spotify.com/documentation/web-api/tutorials/client-credentials-flow
pub async fn request_client_credentials_token(
    client: &reqwest::Client,
    token_url: &Url,
    client_id: &str,
    client_secret: &str,
) -> Result<SpotifyTokenResponse, ClientCredentialsError> {
    let mut params = HashMap::new();
    params.insert("grant_type", "client_credentials");

    let response = client
        .post(token_url.clone())
        // Serializes to x-www-form-urlencoded and sets the content type (as required by spotify)
        .form(&params)
        .header(
            reqwest::header::AUTHORIZATION,
            basic_authorization(client_id, client_secret),
        )
        .send()
        .await
        .map_err(ClientCredentialsError::FailedToSendRequest)?;

    if !response.status().is_success() {
        let status = response.status();
        return Err(ClientCredentialsError::InvalidCredentials {
            reason: format!(
                "{status}: {}",
                response
                    .text()
                    .await
                    .unwrap_or("Failed to get error text".to_string())
            ),
        });
    }

    response
        .json()
        .await
        .map_err(ClientCredentialsError::FailedToParseResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::spawn_stub_server;
    use axum::{Form, Json, Router, http::HeaderMap, http::StatusCode, routing::post};
    use serde_json::json;

    async fn token_endpoint(
        headers: HeaderMap,
        Form(form): Form<HashMap<String, String>>,
    ) -> (StatusCode, Json<serde_json::Value>) {
        let authorized = headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            == Some(basic_authorization("client-id", "client-secret").as_str());

        if !authorized || form.get("grant_type").map(String::as_str) != Some("client_credentials")
        {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "invalid_client" })),
            );
        }

        (
            StatusCode::OK,
            Json(json!({
                "access_token": "fresh-token",
                "token_type": "Bearer",
                "expires_in": 3600
            })),
        )
    }

    #[test]
    fn test_basic_authorization() {
        // base64("id:secret")
        assert_eq!(basic_authorization("id", "secret"), "Basic aWQ6c2VjcmV0");
    }

    #[tokio::test]
    async fn test_request_token_success() {
        let base = spawn_stub_server(Router::new().route("/api/token", post(token_endpoint))).await;
        let token_url = base.join("api/token").unwrap();

        let token = request_client_credentials_token(
            &reqwest::Client::new(),
            &token_url,
            "client-id",
            "client-secret",
        )
        .await
        .unwrap();

        assert_eq!(token.access_token, "fresh-token");
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 3600);
    }

    #[tokio::test]
    async fn test_request_token_invalid_credentials() {
        let base = spawn_stub_server(Router::new().route("/api/token", post(token_endpoint))).await;
        let token_url = base.join("api/token").unwrap();

        let error = request_client_credentials_token(
            &reqwest::Client::new(),
            &token_url,
            "client-id",
            "wrong-secret",
        )
        .await
        .unwrap_err();

        match error {
            ClientCredentialsError::InvalidCredentials { reason } => {
                assert!(reason.contains("400"));
                assert!(reason.contains("invalid_client"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_request_token_unparsable_body() {
        let base = spawn_stub_server(
            Router::new().route("/api/token", post(|| async { "not json" })),
        )
        .await;
        let token_url = base.join("api/token").unwrap();

        let error = request_client_credentials_token(
            &reqwest::Client::new(),
            &token_url,
            "client-id",
            "client-secret",
        )
        .await
        .unwrap_err();

        assert!(matches!(
            error,
            ClientCredentialsError::FailedToParseResponse(_)
        ));
    }
}
