use std::fmt;

use geo_types::Point;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Top level status of a geocode response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ok,
    ZeroResults,
    OverDailyLimit,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    UnknownError,
    Other(String),
}

impl From<&str> for Status {
    fn from(value: &str) -> Self {
        match value {
            "OK" => Status::Ok,
            "ZERO_RESULTS" => Status::ZeroResults,
            "OVER_DAILY_LIMIT" => Status::OverDailyLimit,
            "OVER_QUERY_LIMIT" => Status::OverQueryLimit,
            "REQUEST_DENIED" => Status::RequestDenied,
            "INVALID_REQUEST" => Status::InvalidRequest,
            "UNKNOWN_ERROR" => Status::UnknownError,
            other => Status::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Ok => "OK",
            Status::ZeroResults => "ZERO_RESULTS",
            Status::OverDailyLimit => "OVER_DAILY_LIMIT",
            Status::OverQueryLimit => "OVER_QUERY_LIMIT",
            Status::RequestDenied => "REQUEST_DENIED",
            Status::InvalidRequest => "INVALID_REQUEST",
            Status::UnknownError => "UNKNOWN_ERROR",
            Status::Other(other) => other,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GeocodeResult {
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    pub geometry: Geometry,
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl GeocodeResult {
    /// Location as a point, x = longitude and y = latitude.
    pub fn location(&self) -> Point<f64> {
        Point::new(self.geometry.location.lng, self.geometry.location.lat)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Geometry {
    pub location: LatLng,
    #[serde(default)]
    pub location_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Decode the `results` array of a geocode response. A response without
/// results (e.g. `ZERO_RESULTS`) yields an empty list.
pub fn geocode_results(response: &Value) -> Result<Vec<GeocodeResult>> {
    match response.get("results") {
        Some(results) => Ok(Vec::<GeocodeResult>::deserialize(results)?),
        None => Ok(vec![]),
    }
}
