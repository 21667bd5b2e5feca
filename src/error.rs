use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("a Google Maps API key is required")]
    MissingApiKey,
    #[error("at least one address parameter is required")]
    EmptyAddress,
    /// The service answered with a status other than `OK`.
    #[error("geocoding service returned {status}: {message}")]
    Service { status: String, message: String },
    /// Transport or decode failure, with the request URL (and so the key)
    /// stripped.
    #[error(transparent)]
    Http(reqwest::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("couldn't decode geocode results: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.without_url())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
