use tracing::{debug, warn};

pub const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";

pub struct Config {
    pub api_key: Option<String>,
}

impl Config {
    /// Read the API key, letting a command line value win over the
    /// environment (and any `.env` file).
    pub fn load(cli_api_key: Option<String>) -> Self {
        if dotenvy::dotenv().is_err() {
            debug!("No .env file loaded");
        }
        let api_key = cli_api_key.or_else(|| std::env::var(API_KEY_VAR).ok());
        if api_key.is_none() {
            warn!("No Google Maps API key found, set {API_KEY_VAR} or pass --api-key");
        }
        Self { api_key }
    }
}
