use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{Coordinate, WeatherError, WeatherRecord};

use super::{WeatherProvider, fetch_json};

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn with_client(http: Client, base_url: impl Into<String>, api_key: String) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            http,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    pressure: u32,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

impl From<OwCurrentResponse> for WeatherRecord {
    fn from(parsed: OwCurrentResponse) -> Self {
        let condition = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .unwrap_or_else(|| "Unknown".to_string());

        WeatherRecord {
            location_name: parsed.name,
            country: parsed.sys.country,
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            condition,
            wind_speed_mps: parsed.wind.speed,
            pressure_hpa: parsed.main.pressure,
            humidity_pct: parsed.main.humidity,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, coord: Coordinate) -> Result<WeatherRecord, WeatherError> {
        tracing::debug!(%coord, url = %self.base_url, "requesting current weather");

        let request = self.http.get(&self.base_url).query(&[
            ("lat", coord.lat.to_string()),
            ("lon", coord.lon.to_string()),
            ("appid", self.api_key.clone()),
            ("units", "metric".to_string()),
        ]);

        let parsed: OwCurrentResponse = fetch_json(request).await?;
        Ok(parsed.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    const LONDON: &str = r#"
    {
      "coord": { "lon": -0.13, "lat": 51.5 },
      "weather": [ { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" } ],
      "main": { "temp": 15.0, "feels_like": 14.0, "pressure": 1012, "humidity": 80 },
      "wind": { "speed": 3.6, "deg": 250 },
      "dt": 1700000000,
      "sys": { "country": "GB" },
      "name": "London",
      "cod": 200
    }
    "#;

    #[tokio::test]
    async fn parses_current_weather_with_metric_units() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("lat", "51.5"))
            .and(query_param("lon", "-0.13"))
            .and(query_param("appid", "KEY"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(LONDON, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::with_client(
            Client::new(),
            format!("{}/data/2.5/weather", server.uri()),
            "KEY".to_string(),
        );

        let record = provider
            .current_weather(Coordinate::new(51.5, -0.13))
            .await
            .expect("weather");

        assert_eq!(record.location_name, "London");
        assert_eq!(record.country, "GB");
        assert_eq!(record.temperature_c, 15.0);
        assert_eq!(record.feels_like_c, 14.0);
        assert_eq!(record.condition, "clear sky");
        assert_eq!(record.wind_speed_mps, 3.6);
        assert_eq!(record.pressure_hpa, 1012);
        assert_eq!(record.humidity_pct, 80);
    }

    #[tokio::test]
    async fn non_success_status_reports_code_and_message() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_raw(
                r#"{"cod":401,"message":"Invalid API key."}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let provider =
            OpenWeatherProvider::with_client(Client::new(), server.uri(), "BAD".to_string());
        let err = provider
            .current_weather(Coordinate::new(1.0, 2.0))
            .await
            .unwrap_err();

        match err {
            WeatherError::Service { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API key.");
            }
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
            .mount(&server)
            .await;

        let provider =
            OpenWeatherProvider::with_client(Client::new(), server.uri(), "KEY".to_string());
        let err = provider
            .current_weather(Coordinate::new(1.0, 2.0))
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::Decode(_)));
    }
}
