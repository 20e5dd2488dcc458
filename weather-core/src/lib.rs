//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Geocoding of city names and postal codes
//! - Current-weather lookup behind a provider trait, with an in-memory cache
//! - Formatting of weather records for display
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod cache;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod format;
pub mod geocode;
pub mod model;
pub mod provider;

pub use cache::WeatherCache;
pub use config::Config;
pub use error::WeatherError;
pub use fetcher::WeatherFetcher;
pub use format::{DisplayLine, LineStyle, format_weather};
pub use geocode::GeocodeClient;
pub use model::{Coordinate, PlaceQuery, UnitPreference, WeatherRecord};
pub use provider::{WeatherProvider, provider_from_config};
