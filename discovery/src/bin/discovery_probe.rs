//! Diagnostic CLI that runs one discovery operation and prints the result
//! as JSON on stdout. Logs go to stderr.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};

use clap::{Parser, Subcommand};
use discovery::domain::Coordinates;
use discovery::{DiscoverySettings, build_discovery};
use ortho_config::OrthoConfig;
use serde::Serialize;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// `discovery-probe` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "discovery-probe",
    about = "Run a travel discovery lookup and print the result as JSON",
    version
)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List locations, optionally filtered.
    Locations {
        /// Case-insensitive name or country filter.
        #[arg(long)]
        query: Option<String>,
    },
    /// Fetch one location by id or country name.
    Location {
        /// Location id.
        id: String,
    },
    /// Current weather at a coordinate.
    Weather {
        /// Latitude in degrees.
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        /// Longitude in degrees.
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
    /// Attractions near a coordinate.
    Places {
        /// Latitude in degrees.
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        /// Longitude in degrees.
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
        /// Search radius in metres.
        #[arg(long)]
        radius: Option<u32>,
    },
    /// Photo gallery for a place.
    Photos {
        /// Place name, for example "Paris, France".
        name: String,
        /// Number of photos.
        #[arg(long)]
        count: Option<u32>,
    },
}

fn main() -> io::Result<()> {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %error, "tracing init failed");
    }

    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main(args))
}

async fn async_main(args: CliArgs) -> io::Result<()> {
    let settings = DiscoverySettings::load_from_iter([OsString::from("discovery-probe")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let discovery = build_discovery(&settings)
        .map_err(|error| io::Error::other(format!("build discovery: {error}")))?;

    let mut stdout = io::stdout().lock();
    match args.command {
        Command::Locations { query } => {
            print_json(&mut stdout, &discovery.list_locations(query.as_deref()).await)
        }
        Command::Location { id } => print_json(&mut stdout, &discovery.get_location(&id).await),
        Command::Weather {
            latitude,
            longitude,
        } => print_json(
            &mut stdout,
            &discovery
                .get_weather(Coordinates::new(latitude, longitude))
                .await,
        ),
        Command::Places {
            latitude,
            longitude,
            radius,
        } => print_json(
            &mut stdout,
            &discovery
                .get_places(Coordinates::new(latitude, longitude), radius)
                .await,
        ),
        Command::Photos { name, count } => {
            print_json(&mut stdout, &discovery.get_photos(&name, count).await)
        }
    }
}

fn print_json<T: Serialize>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    writeln!(out)
}
