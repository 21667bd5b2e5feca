use std::sync::OnceLock;

use crate::error::{Error, Result};

pub const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const STATIC_MAP_URL: &str = "https://maps.googleapis.com/maps/api/staticmap";

static REQWEST: OnceLock<reqwest::Client> = OnceLock::new();

pub fn get_reqwest_client() -> &'static reqwest::Client {
    REQWEST.get_or_init(reqwest::Client::new)
}

/// Holds the API key and endpoints for the Google Maps web services.
#[derive(Clone)]
pub struct GeocodeClient {
    pub(crate) http: reqwest::Client,
    api_key: Option<String>,
    pub(crate) geocode_url: String,
    pub(crate) static_map_url: String,
}

impl GeocodeClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_optional_key(Some(api_key.into()))
    }

    /// A client whose key may be absent; requests then fail with
    /// [`Error::MissingApiKey`].
    pub fn from_optional_key(api_key: Option<String>) -> Self {
        Self {
            http: get_reqwest_client().clone(),
            api_key,
            geocode_url: GEOCODE_URL.to_string(),
            static_map_url: STATIC_MAP_URL.to_string(),
        }
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn with_geocode_endpoint(mut self, url: impl Into<String>) -> Self {
        self.geocode_url = url.into();
        self
    }

    pub fn with_static_map_endpoint(mut self, url: impl Into<String>) -> Self {
        self.static_map_url = url.into();
        self
    }

    pub(crate) fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingApiKey)
    }
}

impl std::fmt::Debug for GeocodeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodeClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("geocode_url", &self.geocode_url)
            .field("static_map_url", &self.static_map_url)
            .finish()
    }
}
