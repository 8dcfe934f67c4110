use clap::Parser;
use ipweather_core::{WeatherError, report};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "ipweather",
    version,
    about = "Current weather and 5-day forecast for wherever your public IP says you are",
    after_help = "Requires the OWM_API_KEY environment variable (OpenWeather API key)."
)]
pub struct Cli {
    /// Log more to stderr (-v info, -vv debug, -vvv trace). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        init_tracing(self.verbose);

        let stdout = std::io::stdout();
        report::run_from_env(&mut stdout.lock()).await.map_err(|err| match err {
            WeatherError::Config(_) => anyhow::Error::new(err),
            other => anyhow::Error::new(other).context("Weather report failed"),
        })?;

        Ok(())
    }
}

fn default_filter(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,ipweather={level},ipweather_core={level}")
}

fn init_tracing(verbose: u8) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
