use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use log::warn;
use nordpool::{AREAS, ClientConfig, Currency, NordPoolClient, area_name};
use std::time::Duration;

/// nordpool - Nord Pool day-ahead prices
///
/// Fetch day-ahead electricity prices and print them as JSON.
///
/// Examples:
///   nordpool prices -d 2024-01-01 -a SE3        # One day, one area, in EUR
///   nordpool prices -d 2024-01-01 -d 2024-01-02 -a SE3,SE4 -c SEK
#[derive(Parser, Debug)]
#[command(author, version = env!("NORDPOOL_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL (also via NORDPOOL_API_URL)
    #[arg(long = "api-url", env = "NORDPOOL_API_URL", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Total timeout of a single request
    #[arg(long, value_name = "SECONDS", default_value_t = 8, global = true)]
    pub timeout: u64,

    /// Retries after a failed attempt
    #[arg(long = "max-retries", value_name = "N", default_value_t = 3, global = true)]
    pub max_retries: usize,

    /// Delay between attempts
    #[arg(long = "retry-delay", value_name = "SECONDS", default_value_t = 7, global = true)]
    pub retry_delay: u64,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fetch prices for one or more delivery dates
    Prices(PricesArgs),

    /// List the known delivery areas
    Areas,
}

#[derive(clap::Args, Debug)]
pub struct PricesArgs {
    /// Delivery date, may be repeated
    #[arg(long = "date", short = 'd', value_name = "YYYY-MM-DD", required = true)]
    pub dates: Vec<NaiveDate>,

    /// Delivery areas, comma separated or repeated
    #[arg(
        long = "area",
        short = 'a',
        value_name = "AREA",
        value_delimiter = ',',
        required = true
    )]
    pub areas: Vec<String>,

    /// Currency to report prices in
    #[arg(long, short = 'c', default_value = "EUR")]
    pub currency: Currency,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::default()
            .with_timeout(Duration::from_secs(self.timeout))
            .with_max_retries(self.max_retries)
            .with_retry_delay(Duration::from_secs(self.retry_delay));
        match &self.api_url {
            Some(api_url) => config.with_api_url(api_url),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Prices(args) => prices(cli.client_config(), args).await?,
        Commands::Areas => {
            for (code, name) in AREAS {
                println!("{}\t{}", code, name);
            }
        }
    }
    Ok(())
}

async fn prices(config: ClientConfig, args: &PricesArgs) -> Result<()> {
    for area in &args.areas {
        if area_name(area).is_none() {
            warn!("Unknown delivery area {}, requesting it anyway", area);
        }
    }

    let client = NordPoolClient::with_config(config)?;
    let periods = client
        .get_delivery_periods(&args.dates, args.currency, &args.areas)
        .await
        .context("Failed to fetch delivery periods")?;

    println!("{}", serde_json::to_string_pretty(&periods)?);
    Ok(())
}
