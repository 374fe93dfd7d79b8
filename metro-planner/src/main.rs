use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::error;
use tracing_subscriber::EnvFilter;

use metro_planner::network::Network;
use metro_planner::planner::{
    ConnectivityResponse, DEFAULT_LOG_FILTER, ErrorResponse, ItineraryResponse, Planner,
    PlannerConfig, PlannerError, SearchStopsResponse,
};

/// Route planning over a metro network file.
#[derive(Debug, Parser)]
#[command(name = "metro-planner", version)]
struct Cli {
    /// Path to the network JSON file (stops and links)
    #[arg(long, env = "METRO_NETWORK")]
    network: PathBuf,

    /// Maximum number of stops returned by `search`
    #[arg(long, default_value_t = 10)]
    search_limit: usize,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Quickest route between two stop ids
    Itinerary { start: String, end: String },
    /// Check that every stop can reach every other stop
    Connectivity,
    /// Stops, network adjacency lists and minimum spanning tree
    Map,
    /// Find stop ids by name
    Search { name: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let network = match Network::load(&cli.network) {
        Ok(network) => network,
        Err(e) => {
            error!(path = %cli.network.display(), error = %e, "Failed to load network");
            return print_error(e.to_string());
        }
    };

    let config = PlannerConfig::new(cli.search_limit, cli.log_filter);
    let planner = Planner::new(network, config);

    match cli.command {
        Command::Itinerary { start, end } => match planner.itinerary(&start, &end) {
            Ok(itinerary) => print_json(&ItineraryResponse { itinerary }),
            Err(e) => print_planner_error(&e),
        },
        Command::Connectivity => print_json(&ConnectivityResponse {
            is_connected: planner.is_connected(),
        }),
        Command::Map => print_json(&planner.map()),
        Command::Search { name } => match planner.search_stops(&name) {
            Ok(stops) => print_json(&SearchStopsResponse { stops }),
            Err(e) => print_planner_error(&e),
        },
    }
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to serialize response");
            ExitCode::FAILURE
        }
    }
}

fn print_planner_error(err: &PlannerError) -> ExitCode {
    print_json(&ErrorResponse::from(err));
    ExitCode::from(2)
}

fn print_error(message: String) -> ExitCode {
    print_json(&ErrorResponse { error: message });
    ExitCode::FAILURE
}
