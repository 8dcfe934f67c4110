use std::io::Write;

use crate::{
    Config,
    error::Result,
    format,
    location::{IpApiResolver, LocationResolver},
    model::Units,
    provider::{WeatherProvider, provider_from_config},
};

/// Locate, fetch current weather, fetch the forecast, print.
///
/// Stops at the first failure. Lines already written to `out` stay there.
#[derive(Debug)]
pub struct Report<'a> {
    locator: &'a dyn LocationResolver,
    provider: &'a dyn WeatherProvider,
    units: Units,
    lang: &'a str,
}

impl<'a> Report<'a> {
    pub fn new(
        locator: &'a dyn LocationResolver,
        provider: &'a dyn WeatherProvider,
        units: Units,
        lang: &'a str,
    ) -> Self {
        Self {
            locator,
            provider,
            units,
            lang,
        }
    }

    pub async fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let location = self.locator.resolve().await?;
        let coords = location.coordinates();

        let current = self
            .provider
            .current_weather(coords, self.units, self.lang)
            .await?;

        writeln!(out, "{}", format::summary_line(&location, &current))?;
        writeln!(out, "{}", format::current_line(&current))?;
        out.flush()?;

        let forecast = self
            .provider
            .forecast5(coords, self.units, self.lang)
            .await?;

        tracing::info!(
            city = %forecast.city,
            country = %forecast.country,
            slots = forecast.entries.len(),
            first = ?forecast.entries.first().and_then(|e| e.time),
            last = ?forecast.entries.last().and_then(|e| e.time),
            "forecast window"
        );

        for entry in &forecast.entries {
            writeln!(out, "{}", format::forecast_line(entry))?;
        }
        out.flush()?;

        Ok(())
    }
}

/// Build the config from `lookup`, let `configure` adjust it, then run the report.
///
/// Nothing touches the network until the API key has been found.
pub async fn run_from_lookup<F, C, W>(lookup: F, configure: C, out: &mut W) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
    C: FnOnce(Config) -> Config,
    W: Write,
{
    let config = configure(Config::from_lookup(lookup)?);
    tracing::debug!(?config, "configuration loaded");

    run(&config, out).await
}

/// [`run_from_lookup`] over the process environment, with default endpoints.
pub async fn run_from_env<W: Write>(out: &mut W) -> Result<()> {
    run_from_lookup(|name| std::env::var(name).ok(), |config| config, out).await
}

/// Run the whole report against the services named in `config`.
pub async fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let locator = IpApiResolver::from_config(config);
    let provider = provider_from_config(config);

    Report::new(&locator, provider.as_ref(), config.units, &config.lang)
        .run(out)
        .await
}
