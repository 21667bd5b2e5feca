//! Thin helpers over the Google Maps Geocoding and Static Maps web services.
//!
//! ```no_run
//! # async fn run() -> address_geocoder::Result<()> {
//! use address_geocoder::{GeocodeClient, StaticMapRequest};
//!
//! let client = GeocodeClient::new("API_KEY");
//! let response = client
//!     .geocode(&["1600 Amphitheatre Pkwy", "Mountain View", "CA"], true)
//!     .await?;
//! println!("{}", response["results"][0]["formatted_address"]);
//!
//! let request = StaticMapRequest::new("Mountain View, CA", 640, 480);
//! client.save_static_map(&request, "map.png").await?;
//! # Ok(())
//! # }
//! ```

pub mod clients;
pub mod error;
pub mod geocode;
pub mod query;
pub mod static_map;
pub mod types;

pub use clients::GeocodeClient;
pub use error::{Error, Result};
pub use geocode::check_status;
pub use query::format_address;
pub use static_map::StaticMapRequest;
pub use types::geocode::{geocode_results, GeocodeResult, Status};
