//! Venrate CLI
//!
//! Command-line interface for bolívar exchange-rate lookups.

mod config;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use venrate_client::HttpTransport;
use venrate_types::{HttpMethod, RateQuery, TransportOptions};

#[derive(Parser)]
#[command(name = "venrate")]
#[command(author, version, about = "Exchange rates from BCV, Binance P2P, Yadio and MonitorDolar", long_about = None)]
struct Cli {
    /// Request timeout in seconds (defaults to 10 per source)
    #[arg(long, global = true, env = "VENRATE_TIMEOUT")]
    timeout: Option<u64>,

    /// Skip TLS certificate verification
    #[arg(long, global = true, env = "VENRATE_INSECURE")]
    insecure: bool,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true, env = "VENRATE_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one rate
    GetRate {
        /// Source name (BCV, BINANCE, YADIO, MONITORDOLAR), case-insensitive
        source: String,
        /// Currency converted from
        from: String,
        /// Currency converted to
        to: String,
        /// Override the source's HTTP method
        #[arg(long)]
        method: Option<HttpMethod>,
        /// Override the source's URL
        #[arg(long)]
        url: Option<String>,
    },
    /// Print every rate a source publishes in one response
    GetRates {
        source: String,
        /// Currency converted from (source default when omitted)
        from: Option<String>,
    },
    /// List the configured sources
    Sources,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "error".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn transport_options(cli: &Cli) -> TransportOptions {
    let mut options = TransportOptions::default().insecure(cli.insecure);
    if let Some(secs) = cli.timeout {
        options = options.with_timeout(Duration::from_secs(secs));
    }
    options
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = config::Config::from_env();
    tracing::debug!(?config, "Loaded configuration");
    let mut registry = config.registry(HttpTransport::new()?);
    let options = transport_options(&cli);

    match cli.command {
        Commands::GetRate {
            source,
            from,
            to,
            method,
            url,
        } => {
            let query = RateQuery {
                currency_from: Some(from),
                currency_to: Some(to),
                method,
                url,
                transport_options: options,
                ..RateQuery::default()
            };
            match registry.get_rate(&source, &query).await {
                Ok(rate) => println!("{}", rate),
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::GetRates { source, from } => {
            let query = RateQuery {
                currency_from: from,
                transport_options: options,
                ..RateQuery::default()
            };
            match registry.get_rates(&source, &query).await {
                Ok(rates) => {
                    for rate in rates {
                        println!("{} {}", rate.currency_to, rate);
                    }
                }
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Sources => {
            let configs: Vec<_> = registry.configs().collect();
            println!("{}", serde_json::to_string_pretty(&configs)?);
        }
    }

    Ok(())
}
