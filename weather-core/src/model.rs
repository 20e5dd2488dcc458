/// A (latitude, longitude) pair as returned by the geocoding service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// What the user typed to identify a place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceQuery {
    City(String),
    PostalCode(String),
}

impl PlaceQuery {
    /// Text sent as the geocoding `q` parameter.
    pub fn as_query(&self) -> &str {
        match self {
            PlaceQuery::City(name) => name,
            PlaceQuery::PostalCode(code) => code,
        }
    }
}

/// Current conditions for one coordinate, in metric units.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    pub location_name: String,
    pub country: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub condition: String,
    pub wind_speed_mps: f64,
    pub pressure_hpa: u32,
    pub humidity_pct: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitPreference {
    Celsius,
    Fahrenheit,
}

impl UnitPreference {
    /// Map the interactive menu choice (1 or 2) to a unit.
    pub fn from_choice(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(UnitPreference::Celsius),
            2 => Some(UnitPreference::Fahrenheit),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnitPreference::Celsius => "°C",
            UnitPreference::Fahrenheit => "°F",
        }
    }
}
