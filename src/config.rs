use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::{Context, OptionExt, Result, eyre};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::models::DEFAULT_PLACEHOLDER_ALBUM_ART;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LanguageModelProvider {
    Gemini,
    Ollama,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub port: u16,
    /// Total timeout for Gemini and Spotify requests. Unset means the HTTP client's default (none).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_timeout_secs: Option<u64>,
    /// CORS origins allowed in release builds
    pub allowed_origins: Vec<String>,
    pub language_model: LanguageModelConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageModelConfig {
    pub provider: LanguageModelProvider,
    pub gemini_model: String,
    pub gemini_base_url: Url,
    pub ollama_model: String,
    pub ollama_url: Url,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub token_url: Url,
    pub api_base_url: Url,
    pub placeholder_album_art: String,
}

fn parse_default_url(url: &'static str) -> Url {
    Url::parse(url).expect("built-in url")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 4560,
            http_timeout_secs: None,
            allowed_origins: vec!["http://localhost:4560".to_string()],
            language_model: LanguageModelConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl Default for LanguageModelConfig {
    fn default() -> Self {
        Self {
            provider: LanguageModelProvider::Gemini,
            gemini_model: "gemini-2.5-flash-preview-05-20".to_string(),
            gemini_base_url: parse_default_url("https://generativelanguage.googleapis.com"),
            ollama_model: "llama3.2".to_string(),
            ollama_url: parse_default_url("http://localhost:11434"),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            token_url: parse_default_url("https://accounts.spotify.com/api/token"),
            api_base_url: parse_default_url("https://api.spotify.com/v1"),
            placeholder_album_art: DEFAULT_PLACEHOLDER_ALBUM_ART.to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .wrap_err_with(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Default config file location, e.g. `~/.config/moodbeats/config.toml`
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|path| path.join("moodbeats").join("config.toml"))
    }

    /// Load the default config file, falling back to built-in defaults when it doesn't exist
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Write the default config to the default location, if it doesn't exist
    pub fn create_default() -> Result<PathBuf> {
        let path = Self::config_path().ok_or_eyre("Could not determine config directory")?;
        Self::default().write_new(&path)?;
        Ok(path)
    }

    fn write_new(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Err(eyre!("Config file already exists: {}", path.display()));
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self).wrap_err("Failed to serialize config")?;
        std::fs::write(path, contents)
            .wrap_err_with(|| format!("Failed to write config file: {}", path.display()))
    }

    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout_secs.map(Duration::from_secs)
    }
}

/// Secrets for the external services. Loaded once at startup, never logged.
#[derive(Clone)]
pub struct Credentials {
    pub gemini_api_key: Option<String>,
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "***"))
            .field("spotify_client_id", &self.spotify_client_id)
            .field("spotify_client_secret", &"***")
            .finish()
    }
}

impl Credentials {
    /// Fails when the configured provider needs a key that wasn't supplied.
    pub fn validate_for(&self, provider: LanguageModelProvider) -> Result<()> {
        match provider {
            LanguageModelProvider::Gemini => match self.gemini_api_key.as_deref() {
                Some(key) if !key.trim().is_empty() => Ok(()),
                _ => Err(eyre!(
                    "GEMINI_API_KEY is not set. Set it via --gemini-api-key or the GEMINI_API_KEY environment variable"
                )),
            },
            LanguageModelProvider::Ollama => Ok(()),
        }
    }
}
