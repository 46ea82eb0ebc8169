use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
///
/// Every section has working defaults: with no config file and no
/// credentials the service still boots and serves fallback-only
/// extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub gemini: GeminiSettings,
    #[serde(default)]
    pub amadeus: AmadeusSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    /// Missing key puts the extraction pipelines in fallback-only mode
    pub api_key: Option<String>,
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    /// Candidate models for duration extraction, tried in order
    #[serde(default = "default_duration_models")]
    pub duration_models: Vec<String>,
    /// Candidate models for destination extraction, tried in order
    #[serde(default = "default_destination_models")]
    pub destination_models: Vec<String>,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_gemini_base_url(),
            duration_models: default_duration_models(),
            destination_models: default_destination_models(),
        }
    }
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_duration_models() -> Vec<String> {
    vec![
        "gemini-2.5-pro".to_string(),
        "gemini-2.5-flash".to_string(),
        "gemini-pro-latest".to_string(),
        "gemini-flash-latest".to_string(),
    ]
}

fn default_destination_models() -> Vec<String> {
    vec![
        "gemini-2.5-flash".to_string(),
        "gemini-2.5-pro".to_string(),
        "gemini-flash-latest".to_string(),
        "gemini-pro-latest".to_string(),
    ]
}

#[derive(Debug, Clone, Deserialize)]
pub struct AmadeusSettings {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    #[serde(default = "default_amadeus_base_url")]
    pub base_url: String,
}

impl Default for AmadeusSettings {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            base_url: default_amadeus_base_url(),
        }
    }
}

fn default_amadeus_base_url() -> String {
    "https://test.api.amadeus.com".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with TRIPSCOUT_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with TRIPSCOUT_)
            // e.g., TRIPSCOUT_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("TRIPSCOUT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Apply the well-known credential variables
        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("TRIPSCOUT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the credential variables the deployment environments already use
/// (GOOGLE_API_KEY, AMADEUS_CLIENT_ID, AMADEUS_CLIENT_SECRET), with the
/// prefixed forms accepted as well.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let gemini_api_key = env::var("GOOGLE_API_KEY")
        .or_else(|_| env::var("TRIPSCOUT_GEMINI__API_KEY"))
        .ok();
    let amadeus_client_id = env::var("AMADEUS_CLIENT_ID")
        .or_else(|_| env::var("TRIPSCOUT_AMADEUS__CLIENT_ID"))
        .ok();
    let amadeus_client_secret = env::var("AMADEUS_CLIENT_SECRET")
        .or_else(|_| env::var("TRIPSCOUT_AMADEUS__CLIENT_SECRET"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(api_key) = gemini_api_key {
        builder = builder.set_override("gemini.api_key", api_key)?;
    }
    if let Some(client_id) = amadeus_client_id {
        builder = builder.set_override("amadeus.client_id", client_id)?;
    }
    if let Some(client_secret) = amadeus_client_secret {
        builder = builder.set_override("amadeus.client_secret", client_secret)?;
    }

    builder.build()
}
