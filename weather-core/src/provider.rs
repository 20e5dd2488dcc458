use crate::{
    Config, Coordinate, WeatherError, WeatherRecord, provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::{fmt::Debug, time::Duration};

pub mod openweather;

/// Source of current conditions for a coordinate.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, coord: Coordinate) -> Result<WeatherRecord, WeatherError>;
}

/// Construct the OpenWeatherMap provider from config and a resolved API key.
pub fn provider_from_config(
    config: &Config,
    api_key: &str,
) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    let http = http_client(config.request_timeout())?;
    Ok(Box::new(OpenWeatherProvider::with_client(
        http,
        config.weather_url(),
        api_key.to_owned(),
    )))
}

pub(crate) fn http_client(timeout: Duration) -> Result<Client, WeatherError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Send a request and decode a successful JSON body.
///
/// Non-success statuses become [`WeatherError::Service`] carrying the
/// server-supplied message.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<T, WeatherError> {
    let res = request.send().await?;

    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        tracing::warn!(%status, body = %truncate_body(&body), "request failed");
        return Err(WeatherError::from_service_body(status.as_u16(), &body));
    }

    Ok(serde_json::from_str(&body)?)
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
