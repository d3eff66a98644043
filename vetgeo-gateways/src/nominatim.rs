use reqwest::blocking::{Client, Request};
use serde::Deserialize;
use std::time::Duration;
use vetgeo_core::gateways::geocode::{GeoCodingError, GeoCodingGateway};
use vetgeo_entities::geo::MapPoint;

/// A geocoding gateway based on the OpenStreetMap Nominatim search API.
///
/// Nominatim requires every client to identify itself
/// with a meaningful `User-Agent`.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: JsonError,
}

#[derive(Debug, Deserialize, thiserror::Error)]
#[error("{message} ({code})")]
struct JsonError {
    code: u16,
    message: String,
}

impl Nominatim {
    pub fn try_new(
        endpoint: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        let endpoint = endpoint.into();
        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    fn search_request(&self, address: &str) -> reqwest::Result<Request> {
        self.client
            .get(&self.endpoint)
            .query(&[("q", address), ("format", "jsonv2"), ("limit", "1")])
            .build()
    }

    fn map_request_error(&self, err: reqwest::Error) -> GeoCodingError {
        if err.is_timeout() {
            GeoCodingError::Timeout(self.timeout)
        } else {
            GeoCodingError::Other(err.into())
        }
    }
}

fn parse_search_response(body: &str) -> Result<Option<MapPoint>, GeoCodingError> {
    let results: Vec<SearchResult> = serde_json::from_str(body)
        .map_err(|err| GeoCodingError::InvalidResponse(err.to_string()))?;
    let Some(SearchResult { lat, lon }) = results.into_iter().next() else {
        return Ok(None);
    };
    let pos = MapPoint::parse_lat_lng_deg(&lat, &lon)?;
    Ok(Some(pos))
}

fn parse_error_response(status: u16, body: &str) -> GeoCodingError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse { error }) => GeoCodingError::Other(error.into()),
        Err(_) => GeoCodingError::Status(status),
    }
}

impl GeoCodingGateway for Nominatim {
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<MapPoint>, GeoCodingError> {
        let request = self
            .search_request(address)
            .map_err(|err| self.map_request_error(err))?;
        log::debug!("Nominatim request: {}", request.url());
        let response = self
            .client
            .execute(request)
            .map_err(|err| self.map_request_error(err))?;
        let status = response.status();
        let body = response.text().map_err(|err| self.map_request_error(err))?;
        if !status.is_success() {
            return Err(parse_error_response(status.as_u16(), &body));
        }
        log::debug!("Nominatim response: {body}");
        parse_search_response(&body)
    }
}
