use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use color_eyre::eyre::{Context, Result, eyre};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::{Config, Credentials},
    http_server::{
        http_routes::{
            client_page::{client_page, health},
            generate_playlist::generate_playlist,
        },
        state::AppState,
    },
    ports::{catalog::CatalogClient, language_model::LanguageModel},
    services::build_playlist_service,
};

pub struct HttpServerConfig {
    pub port: u16,
    pub config: Config,
    pub credentials: Credentials,
}

fn cors_layer(config: &Config) -> Result<CorsLayer> {
    if cfg!(debug_assertions) {
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .wrap_err_with(|| format!("Invalid allowed origin: {origin}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

pub fn router<L, C>(app_state: Arc<AppState<L, C>>, cors_layer: CorsLayer) -> Router
where
    L: LanguageModel + 'static,
    C: CatalogClient + 'static,
{
    Router::new()
        .route("/", get(client_page))
        .route("/health", get(health))
        .route("/api/generate-playlist", post(generate_playlist::<L, C>))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        )
        .with_state(app_state)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutting down HTTP server"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}

pub async fn start(server_config: HttpServerConfig) -> Result<()> {
    let HttpServerConfig {
        port,
        config,
        credentials,
    } = server_config;

    let playlist_service = build_playlist_service(&config, &credentials)?;
    let app_state = Arc::new(AppState { playlist_service });
    let app = router(app_state, cors_layer(&config)?);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .wrap_err_with(|| eyre!("Failed to bind to port {}", port))?;
    tracing::info!("Server is running on http://localhost:{}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Failed to start HTTP server")?;

    Ok(())
}
