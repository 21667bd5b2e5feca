use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    clients::GeocodeClient,
    error::Result,
    query::format_address,
};

pub const DEFAULT_ZOOM: u8 = 15;
pub const DEFAULT_MARKER_COLOR: &str = "red";
pub const DEFAULT_FORMAT: &str = "png";
pub const DEFAULT_MAP_TYPE: &str = "roadmap";

/// Parameters of a single static map image centred on a marked address.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticMapRequest {
    pub address: String,
    pub width: u32,
    pub height: u32,
    pub marker_color: String,
    pub zoom: u8,
    pub format: String,
    pub map_type: String,
}

impl StaticMapRequest {
    pub fn new(address: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            address: address.into(),
            width,
            height,
            marker_color: DEFAULT_MARKER_COLOR.to_string(),
            zoom: DEFAULT_ZOOM,
            format: DEFAULT_FORMAT.to_string(),
            map_type: DEFAULT_MAP_TYPE.to_string(),
        }
    }

    pub fn marker_color(mut self, color: impl Into<String>) -> Self {
        self.marker_color = color.into();
        self
    }

    pub fn zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn map_type(mut self, map_type: impl Into<String>) -> Self {
        self.map_type = map_type.into();
        self
    }

    /// Full image URL against `base`. The address goes through the same
    /// space encoding as geocode queries.
    pub fn url(&self, base: &str, key: &str) -> Result<String> {
        let address = format_address(&[self.address.as_str()])?;
        Ok(format!(
            "{base}?zoom={}&size={}x{}&maptype={}&format={}&markers=color:{}|{address}&key={key}",
            self.zoom, self.width, self.height, self.map_type, self.format, self.marker_color,
        ))
    }
}

impl GeocodeClient {
    /// Download the static map for `request` to `destination`, replacing any
    /// file already there.
    ///
    /// A missing key or address is an error. A failed download is not: it is
    /// logged and reported as `Ok(None)`.
    #[instrument(skip(self, request), fields(address = %request.address))]
    pub async fn save_static_map(
        &self,
        request: &StaticMapRequest,
        destination: impl AsRef<Path> + std::fmt::Debug,
    ) -> Result<Option<PathBuf>> {
        let url = request.url(&self.static_map_url, self.api_key()?)?;
        let destination = destination.as_ref();
        match self.download(&url, destination).await {
            Ok(()) => {
                info!("Saved static map to {}", destination.display());
                Ok(Some(destination.to_path_buf()))
            }
            Err(err) => {
                warn!("Couldn't save static map to {}: {err}", destination.display());
                Ok(None)
            }
        }
    }

    async fn download(&self, url: &str, destination: &Path) -> Result<()> {
        match tokio::fs::remove_file(destination).await {
            Err(err) if err.kind() != std::io::ErrorKind::NotFound => return Err(err.into()),
            _ => {}
        }
        let bytes = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        tokio::fs::write(destination, &bytes).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::{http::StatusCode, routing::get, Router};

    use super::*;
    use crate::error::Error;

    const KEY: &str = "SECRET-KEY-123";

    fn closed_port() -> SocketAddr {
        std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
    }

    #[test]
    fn defaults_are_applied() {
        let request = StaticMapRequest::new("Berlin", 640, 480);
        assert_eq!(request.zoom, 15);
        assert_eq!(request.marker_color, "red");
        assert_eq!(request.format, "png");
        assert_eq!(request.map_type, "roadmap");
    }

    #[test]
    fn url_carries_every_parameter() {
        let url = StaticMapRequest::new("1600 Amphitheatre Pkwy, Mountain View", 400, 300)
            .zoom(12)
            .marker_color("blue")
            .format("jpg")
            .map_type("satellite")
            .url("https://maps.example/staticmap", "k3y")
            .unwrap();
        assert_eq!(
            url,
            "https://maps.example/staticmap?zoom=12&size=400x300&maptype=satellite&format=jpg\
             &markers=color:blue|1600+Amphitheatre+Pkwy,+Mountain+View&key=k3y"
        );
    }

    #[test]
    fn blank_address_is_rejected() {
        let err = StaticMapRequest::new("  ", 10, 10)
            .url("https://maps.example/staticmap", "k3y")
            .unwrap_err();
        assert!(matches!(err, Error::EmptyAddress));
    }

    #[tokio::test]
    async fn missing_key_is_an_error_not_a_failed_download() {
        let dir = tempfile::tempdir().unwrap();
        let client = GeocodeClient::from_optional_key(None);
        let request = StaticMapRequest::new("Berlin", 10, 10);
        let err = client
            .save_static_map(&request, dir.path().join("map.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingApiKey));
    }

    #[tokio::test]
    async fn download_errors_do_not_carry_the_key() {
        let app = Router::new().route("/staticmap", get(|| async { StatusCode::FORBIDDEN }));
        let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
            .serve(app.into_make_service());
        let forbidden = server.local_addr();
        tokio::spawn(server);

        let dir = tempfile::tempdir().unwrap();
        let client = GeocodeClient::new(KEY).with_http_client(reqwest::Client::new());
        let request = StaticMapRequest::new("Berlin", 10, 10);
        for addr in [forbidden, closed_port()] {
            let url = request
                .url(&format!("http://{addr}/staticmap"), KEY)
                .unwrap();
            let err = client
                .download(&url, &dir.path().join("map.png"))
                .await
                .unwrap_err();
            assert!(matches!(err, Error::Http(_)));
            assert!(!err.to_string().contains(KEY), "{err}");
            assert!(!format!("{err:?}").contains(KEY), "{err:?}");
        }
    }
}
