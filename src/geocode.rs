use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::{
    clients::GeocodeClient,
    error::{Error, Result},
    query::format_address,
    types::geocode::Status,
};

impl GeocodeClient {
    /// Geocode an address given as ordered fragments (street, city, zip...).
    ///
    /// The decoded JSON is returned as is. With `raise_on_status` a status
    /// other than `OK` becomes [`Error::Service`].
    #[instrument(skip(self))]
    pub async fn geocode<S>(&self, params: &[S], raise_on_status: bool) -> Result<Value>
    where
        S: AsRef<str> + std::fmt::Debug,
    {
        let key = self.api_key()?;
        let address = format_address(params)?;
        let url = format!("{}?address={}&key={}", self.geocode_url, address, key);

        info!("Geocoding {address}");
        let response = self.http.get(&url).send().await?;
        debug!("geocode endpoint answered {}", response.status());
        let body = response.json::<Value>().await?;
        check_status(body, raise_on_status)
    }
}

/// Inspect the top level `status` of a decoded geocode response.
pub fn check_status(response: Value, raise_on_status: bool) -> Result<Value> {
    if !raise_on_status {
        return Ok(response);
    }
    let status = response
        .get("status")
        .and_then(Value::as_str)
        .map_or(Status::UnknownError, Status::from);
    if status == Status::Ok {
        return Ok(response);
    }
    let message = response
        .get("error_message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    Err(Error::Service {
        status: status.to_string(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn ok_response_is_returned_unmodified() {
        let response = json!({
            "status": "OK",
            "results": [{ "formatted_address": "Somewhere", "extra": [1, 2, 3] }],
        });
        assert_eq!(check_status(response.clone(), true).unwrap(), response);
    }

    #[rstest]
    #[case("ZERO_RESULTS")]
    #[case("REQUEST_DENIED")]
    #[case("OVER_QUERY_LIMIT")]
    #[case("SOMETHING_NEW")]
    fn non_ok_status_raises_with_status(#[case] status: &str) {
        let response = json!({ "status": status, "results": [], "error_message": "nope" });
        let err = check_status(response, true).unwrap_err();
        assert!(err.to_string().contains(status));
        match err {
            Error::Service { status: s, message } => {
                assert_eq!(s, status);
                assert_eq!(message, "nope");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn non_ok_status_passes_through_when_not_raising() {
        let response = json!({ "status": "REQUEST_DENIED", "error_message": "bad key" });
        assert_eq!(check_status(response.clone(), false).unwrap(), response);
    }

    #[test]
    fn missing_status_is_an_unknown_error() {
        let err = check_status(json!({ "results": [] }), true).unwrap_err();
        assert!(matches!(err, Error::Service { ref status, .. } if status == "UNKNOWN_ERROR"));
    }

    #[tokio::test]
    async fn geocode_without_key_fails_before_any_request() {
        let client = GeocodeClient::from_optional_key(None)
            .with_geocode_endpoint("http://127.0.0.1:1/unreachable");
        let err = client.geocode(&["Berlin"], true).await.unwrap_err();
        assert!(matches!(err, Error::MissingApiKey));
        let empty: [&str; 0] = [];
        let err = client.geocode(&empty, false).await.unwrap_err();
        assert!(matches!(err, Error::MissingApiKey));
    }

    #[tokio::test]
    async fn geocode_with_empty_params_fails() {
        let client =
            GeocodeClient::new("key").with_geocode_endpoint("http://127.0.0.1:1/unreachable");
        let empty: Vec<String> = vec![];
        let err = client.geocode(&empty, true).await.unwrap_err();
        assert!(matches!(err, Error::EmptyAddress));
    }
}
