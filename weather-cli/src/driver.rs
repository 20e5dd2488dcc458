use std::io::Write;

use anyhow::Result;
use weather_core::{
    GeocodeClient, PlaceQuery, UnitPreference, WeatherFetcher, format_weather,
    geocode::DEFAULT_LIMIT,
};

use crate::{prompt::Prompt, render::Renderer};

const GREETING: &str =
    "Hi, it is a Simple Weather Forecast Application to help you get weather information quickly";
const INVALID_UNIT: &str = "Invalid input. Please enter a number 1 or 2.";

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Displayed,
    /// Location or weather lookup failed; the reason was already printed.
    Failed,
}

/// One interactive lookup: place prompt, geocoding, weather fetch, unit
/// prompt, display.
#[derive(Debug)]
pub struct Driver<P, W> {
    geocoder: GeocodeClient,
    fetcher: WeatherFetcher,
    prompt: P,
    out: W,
    render: Renderer,
}

impl<P: Prompt, W: Write> Driver<P, W> {
    pub fn new(
        geocoder: GeocodeClient,
        fetcher: WeatherFetcher,
        prompt: P,
        out: W,
        render: Renderer,
    ) -> Self {
        Self {
            geocoder,
            fetcher,
            prompt,
            out,
            render,
        }
    }

    pub async fn run(&mut self) -> Result<Outcome> {
        writeln!(self.out, "{}", self.render.banner(GREETING))?;

        let query = self.ask_place()?;

        let coord = match self.geocoder.resolve(&query, DEFAULT_LIMIT).await {
            Ok(coord) => coord,
            Err(err) => {
                writeln!(self.out, "{}", self.render.error(&err.to_string()))?;
                writeln!(
                    self.out,
                    "{}",
                    self.render.notice("Unable to get the coordinates for the given city.")
                )?;
                return Ok(Outcome::Failed);
            }
        };

        writeln!(self.out, "{}", self.render.plain("Fetching weather data..."))?;
        let record = match self.fetcher.fetch(coord).await {
            Ok(record) => record,
            Err(err) => {
                writeln!(self.out, "{}", self.render.error(&err.to_string()))?;
                return Ok(Outcome::Failed);
            }
        };

        let unit = self.ask_unit()?;

        for line in format_weather(&record, unit) {
            writeln!(self.out, "{}", self.render.line(&line))?;
        }
        self.out.flush()?;

        Ok(Outcome::Displayed)
    }

    fn ask_place(&mut self) -> Result<PlaceQuery> {
        let city = self.prompt.ask("Input the name of a city: ")?;
        let city = city.trim();
        if !city.is_empty() {
            return Ok(PlaceQuery::City(city.to_string()));
        }

        let zip = self.prompt.ask("Input the ZIP code: ")?;
        Ok(PlaceQuery::PostalCode(zip.trim().to_string()))
    }

    fn ask_unit(&mut self) -> Result<UnitPreference> {
        writeln!(self.out, "{}", self.render.plain("1. Celsius\n2. Fahrenheit"))?;
        loop {
            let answer = self
                .prompt
                .ask("Choose temperature unit Celsius or Fahrenheit. Please type 1 or 2: ")?;

            match answer.trim().parse::<u8>().ok().and_then(UnitPreference::from_choice) {
                Some(unit) => return Ok(unit),
                None => writeln!(self.out, "{}", self.render.notice(INVALID_UNIT))?,
            }
        }
    }
}
