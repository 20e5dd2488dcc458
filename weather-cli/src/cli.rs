use std::{
    io::{self, IsTerminal, Write},
    process::ExitCode,
};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use weather_core::{Config, GeocodeClient, WeatherFetcher, provider_from_config};

use crate::{
    driver::{Driver, Outcome},
    prompt::{InquirePrompt, LinePrompt, Prompt},
    render::Renderer,
};

/// Top-level CLI struct.
///
/// Without a subcommand the tool runs the interactive lookup.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Current weather for a city name or postal code"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key in the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Some(Command::Configure) => configure(),
            None => lookup().await,
        }
    }
}

fn configure() -> anyhow::Result<ExitCode> {
    let mut config = Config::load()?;

    let key = inquire::Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let key = key.trim();
    if key.is_empty() {
        bail!("API key must not be empty");
    }

    config.set_api_key(key.to_string());
    config.save()?;

    let path = Config::config_file_path()?;
    tracing::debug!(path = %path.display(), "saved configuration");
    println!("Saved API key to {}", path.display());
    Ok(ExitCode::SUCCESS)
}

async fn lookup() -> anyhow::Result<ExitCode> {
    let config = Config::load()?;
    let api_key = config.resolve_api_key()?;

    let geocoder = GeocodeClient::from_config(&config, &api_key)?;
    let fetcher = WeatherFetcher::new(provider_from_config(&config, &api_key)?);

    let render = Renderer::for_stdout();

    let outcome = if io::stdin().is_terminal() {
        run_driver(geocoder, fetcher, InquirePrompt, render).await?
    } else {
        tracing::debug!("stdin is not a terminal, reading answers line by line");
        let prompt = LinePrompt::new(io::stdin().lock(), io::stdout());
        run_driver(geocoder, fetcher, prompt, render).await?
    };

    tracing::debug!(?outcome, "lookup finished");
    match outcome {
        Outcome::Displayed => Ok(ExitCode::SUCCESS),
        Outcome::Failed => Ok(ExitCode::FAILURE),
    }
}

async fn run_driver<P: Prompt>(
    geocoder: GeocodeClient,
    fetcher: WeatherFetcher,
    prompt: P,
    render: Renderer,
) -> anyhow::Result<Outcome> {
    let mut driver = Driver::new(geocoder, fetcher, prompt, io::stdout(), render);
    let outcome = driver.run().await;
    io::stdout().flush()?;
    outcome
}
