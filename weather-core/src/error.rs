use thiserror::Error;

/// Failures of the geocoding and weather lookups.
///
/// None of these are fatal inside the library; the caller decides whether a
/// run can continue.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The service answered with a non-success status.
    #[error("Error: {status} - {message}")]
    Service { status: u16, message: String },

    /// The service answered successfully but returned no usable data.
    #[error("No info found for the given location.")]
    NotFound,

    #[error("Failed to reach the weather service: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse the weather service response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl WeatherError {
    /// Build a [`WeatherError::Service`] from a failed response body.
    ///
    /// OpenWeatherMap reports errors as `{"cod": .., "message": ".."}`; any
    /// other body falls back to `"Unknown error"`.
    pub fn from_service_body(status: u16, body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            message: Option<String>,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "Unknown error".to_string());

        WeatherError::Service { status, message }
    }
}
