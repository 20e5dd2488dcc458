//! Forward geocoding: city name or postal code to coordinates.

use reqwest::Client;
use serde::Deserialize;

use crate::{
    Config, Coordinate, PlaceQuery, WeatherError,
    provider::{fetch_json, http_client},
};

/// Number of candidates requested when the caller has no preference.
pub const DEFAULT_LIMIT: u32 = 1;

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    api_key: String,
    base_url: String,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    lat: f64,
    lon: f64,
}

impl GeocodeClient {
    pub fn with_client(http: Client, base_url: impl Into<String>, api_key: String) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            http,
        }
    }

    pub fn from_config(config: &Config, api_key: &str) -> Result<Self, WeatherError> {
        let http = http_client(config.request_timeout())?;
        Ok(Self::with_client(http, config.geocode_url(), api_key.to_owned()))
    }

    /// Resolve a place to the coordinates of the service's first (best ranked)
    /// match.
    pub async fn resolve(
        &self,
        query: &PlaceQuery,
        limit: u32,
    ) -> Result<Coordinate, WeatherError> {
        tracing::debug!(?query, limit, "geocoding");

        let request = self.http.get(&self.base_url).query(&[
            ("q", query.as_query().to_string()),
            ("limit", limit.to_string()),
            ("appid", self.api_key.clone()),
        ]);

        let results: Vec<GeocodeResult> = fetch_json(request).await?;

        let first = results.into_iter().next().ok_or(WeatherError::NotFound)?;
        let coord = Coordinate::new(first.lat, first.lon);

        tracing::debug!(%coord, "geocoded");
        Ok(coord)
    }
}
