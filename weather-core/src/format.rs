//! Human-readable rendering of a [`WeatherRecord`].
//!
//! The formatter only produces text and a style tag per line; turning styles
//! into terminal colors is up to the caller.

use crate::{UnitPreference, WeatherRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Location header.
    Heading,
    /// Measurement lines.
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub text: String,
    pub style: LineStyle,
}

impl DisplayLine {
    fn heading(text: String) -> Self {
        Self {
            text,
            style: LineStyle::Heading,
        }
    }

    fn value(text: String) -> Self {
        Self {
            text,
            style: LineStyle::Value,
        }
    }
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Format a measurement the way the service reports it, keeping a decimal
/// point on whole values (`5.0`, not `5`).
fn decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

pub fn format_weather(record: &WeatherRecord, unit: UnitPreference) -> Vec<DisplayLine> {
    let (temp, feels_like) = match unit {
        UnitPreference::Celsius => (record.temperature_c, record.feels_like_c),
        UnitPreference::Fahrenheit => (
            celsius_to_fahrenheit(record.temperature_c),
            celsius_to_fahrenheit(record.feels_like_c),
        ),
    };
    let symbol = unit.symbol();

    vec![
        DisplayLine::heading(format!("{}, {}", record.location_name, record.country)),
        DisplayLine::value(format!("{temp:.2} {symbol}")),
        DisplayLine::value(format!("Feels like {feels_like:.2} {symbol}")),
        DisplayLine::value(capitalize(&record.condition)),
        DisplayLine::value(format!("Wind speed: {} m/s", decimal(record.wind_speed_mps))),
        DisplayLine::value(format!("Atmospheric pressure: {} hPa", record.pressure_hpa)),
        DisplayLine::value(format!("Humidity: {}%", record.humidity_pct)),
    ]
}
