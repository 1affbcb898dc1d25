//! City Explorer CLI
//!
//! Searches a city through a running server and prints the selection, the
//! nearby places and the public holidays.

#![allow(clippy::print_stdout)]

mod client;
mod render;

use clap::{Parser, Subcommand};
use client::ExplorerApi;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// City Explorer CLI
#[derive(Debug, Parser)]
#[command(name = "city-explorer-cli")]
#[command(author, version, about = "City Explorer CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up a city, its restaurants and its holidays
    Search {
        /// City name
        city: String,

        /// Holiday pages to print
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,

        /// Server URL
        #[arg(short, long, env = "CITY_EXPLORER_URL", default_value = "http://localhost:3000")]
        url: String,
    },

    /// Check server readiness (exit code 1 when not ready)
    Health {
        /// Server URL
        #[arg(short, long, env = "CITY_EXPLORER_URL", default_value = "http://localhost:3000")]
        url: String,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

async fn search(api: &ExplorerApi, city: &str, pages: u32) -> anyhow::Result<()> {
    let session = api.create_session().await?;
    let session_id = session["session_id"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("server returned no session id"))?
        .to_string();

    let result = print_search(api, &session_id, city, pages).await;
    api.close_session(&session_id).await;
    result
}

async fn print_search(
    api: &ExplorerApi,
    session_id: &str,
    city: &str,
    pages: u32,
) -> anyhow::Result<()> {
    let mut snapshot = api.search(session_id, city).await?;
    println!("{}", render::selection(&snapshot));
    print!("{}", render::holiday_page(&snapshot));

    for _ in 1..pages {
        if !render::has_next_page(&snapshot) {
            break;
        }
        snapshot = api.next_holidays(session_id).await?;
        print!("{}", render::holiday_page(&snapshot));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(cli.verbose)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Search { city, pages, url } => {
            search(&ExplorerApi::new(&url), &city, pages).await?;
        },

        Commands::Health { url } => match ExplorerApi::new(&url).ready().await {
            Ok(status) if status.is_success() => {
                println!("Healthy");
            },
            Ok(status) => {
                println!("Unhealthy: HTTP {status}");
                std::process::exit(1);
            },
            Err(e) => {
                println!("Unhealthy: {e}");
                std::process::exit(1);
            },
        },
    }

    Ok(())
}
