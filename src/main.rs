mod config;
mod gemini_rs;
mod http_server;
mod logging;
mod models;
mod ports;
mod services;
mod spotify_rs;
#[cfg(test)]
mod test_utils;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::{Result, eyre::Context};

use crate::{
    config::{Config, Credentials, LanguageModelProvider},
    http_server::app::HttpServerConfig,
    logging::init_tracing,
    services::build_playlist_service,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The config file to use
    #[arg(short, long, env = "MOODBEATS_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `info` or `moodbeats=debug,tower_http=debug`
    #[arg(long, default_value = "info", global = true, env = "LOG_LEVEL")]
    log_level: String,

    /// OTLP gRPC endpoint to export traces to
    #[arg(long, env = "OTEL_EXPORTER_OTLP_ENDPOINT", global = true)]
    otlp_endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug)]
struct CredentialArgs {
    /// Gemini API key (required when the language model provider is gemini)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: Option<String>,

    /// Spotify app client id
    #[arg(long, env = "SPOTIFY_CLIENT_ID", hide_env_values = true)]
    spotify_client_id: String,

    /// Spotify app client secret
    #[arg(long, env = "SPOTIFY_CLIENT_SECRET", hide_env_values = true)]
    spotify_client_secret: String,

    /// Override the configured language model provider
    #[arg(long, value_enum, env = "MOODBEATS_LLM_PROVIDER")]
    provider: Option<LanguageModelProvider>,
}

impl CredentialArgs {
    /// Split into credentials, applying the provider override to `config`.
    fn apply(self, config: &mut Config) -> Result<Credentials> {
        if let Some(provider) = self.provider {
            config.language_model.provider = provider;
        }
        let credentials = Credentials {
            gemini_api_key: self.gemini_api_key,
            spotify_client_id: self.spotify_client_id,
            spotify_client_secret: self.spotify_client_secret,
        };
        credentials.validate_for(config.language_model.provider)?;
        Ok(credentials)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API and the browser client
    Serve {
        /// The port to run the server on (defaults to the config file's port)
        #[arg(short, long, env = "MOODBEATS_HTTP_PORT")]
        port: Option<u16>,

        #[command(flatten)]
        credentials: CredentialArgs,
    },
    /// Generate a playlist for a mood and print it
    Generate {
        /// Free-text description of the mood or activity
        mood: String,

        #[command(flatten)]
        credentials: CredentialArgs,
    },
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Create a default config file, if it doesn't exist
    CreateDefault,
    /// Print the path to the config file
    Path,
}

async fn print_playlist(config: &Config, credentials: &Credentials, mood: &str) -> Result<()> {
    let service = build_playlist_service(config, credentials)?;

    let playlist = service.generate(Some(mood)).await.map_err(|err| {
        tracing::error!(stage = err.stage(), "Playlist generation failed: {err:?}");
        color_eyre::eyre::eyre!("Failed to generate playlist. {err}")
    })?;

    println!("Found {} tracks that match your vibe", playlist.tracks.len());
    for (i, track) in playlist.tracks.iter().enumerate() {
        println!(
            "{:>2}. {} - {} [{}] ({})",
            i + 1,
            track.name,
            track.artists,
            track.album_name,
            track.formatted_duration()
        );
        if let Some(url) = &track.url {
            println!("    {url}");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Variables already set in the environment take precedence over `.env`
    let dotenv_path = dotenvy::dotenv().ok();
    let args = Args::parse();
    let _tracing_guard = init_tracing(args.otlp_endpoint.as_deref(), &args.log_level)?;

    tracing::debug!("MoodBeats starting");
    if let Some(path) = dotenv_path {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let mut config = match &args.config {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    }
    .wrap_err("Failed to load moodbeats config")?;

    match args.command {
        Commands::Serve { port, credentials } => {
            let credentials = credentials.apply(&mut config)?;
            let port = port.unwrap_or(config.port);
            tracing::info!(
                provider = ?config.language_model.provider,
                "Starting HTTP server on port: {}",
                port
            );
            http_server::app::start(HttpServerConfig {
                port,
                config,
                credentials,
            })
            .await?;
        }
        Commands::Generate { mood, credentials } => {
            let credentials = credentials.apply(&mut config)?;
            print_playlist(&config, &credentials, &mood).await?;
        }
        Commands::Config(config_commands) => match config_commands {
            ConfigCommands::CreateDefault => {
                let path = Config::create_default()?;
                tracing::info!("Default config created at {}", path.display());
            }
            ConfigCommands::Path => match Config::config_path() {
                Some(path) => println!("{}", path.display()),
                None => println!("No default config path found"),
            },
        },
    }

    Ok(())
}
