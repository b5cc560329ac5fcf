mod coordinate;
mod geocode;
mod map;
mod predict;
mod relay;
mod satellite;
mod tracker;
mod web;

#[cfg(test)]
mod test_support;

use chrono::Local;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::coordinate::Coordinate;
use crate::web::state::AppState;
use crate::web::Config;

#[derive(Parser)]
#[command(name = "iss-overhead")]
#[command(about = "Where the ISS is right now, and when you can next see it")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the N2YO relay and the map server
    Serve {
        /// YAML config file
        #[arg(long)]
        config: Option<String>,
    },
    /// Look up the ISS from a location and print the result
    Locate {
        /// Free-text address to geocode
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        address: Option<String>,
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Go through a running relay (e.g. https://host/n2yo) instead of N2YO directly
        #[arg(long)]
        relay_url: Option<String>,
        /// YAML config file
        #[arg(long)]
        config: Option<String>,
    },
}

enum Target {
    Address(String),
    Point(Coordinate),
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(config.as_deref()).await,
        Commands::Locate {
            address,
            lat,
            lon,
            relay_url,
            config,
        } => {
            let target = match (address, lat, lon) {
                (Some(address), _, _) => Target::Address(address),
                (None, Some(lat), Some(lon)) => Target::Point(Coordinate::new(lat, lon)),
                _ => {
                    eprintln!("Provide --address or both --lat and --lon");
                    return ExitCode::FAILURE;
                }
            };
            locate(target, relay_url, config.as_deref()).await
        }
    }
}

fn load_config(path: Option<&str>) -> Option<Config> {
    match Config::load(path) {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            None
        }
    }
}

async fn serve(config_path: Option<&str>) -> ExitCode {
    let Some(config) = load_config(config_path) else {
        return ExitCode::FAILURE;
    };

    match web::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn locate(target: Target, relay_url: Option<String>, config_path: Option<&str>) -> ExitCode {
    let Some(mut config) = load_config(config_path) else {
        return ExitCode::FAILURE;
    };

    // A remote relay holds its own credential.
    if let Some(url) = relay_url {
        config.relay.upstream_url = url;
        config.relay.api_key = None;
    } else if config.relay.api_key.is_none() {
        log::warn!("{} is not set", web::config::API_KEY_ENV);
    }

    let state = match AppState::from_config(config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Setup error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut tracker = state.tracker(*Local::now().offset());
    match target {
        Target::Address(address) => tracker.locate_address(&address).await,
        Target::Point(at) => tracker.track(at).await,
    }

    let scene = tracker.status().scene;
    log::info!(
        "Trajectory: {} segment(s), {} arrow(s)",
        scene.path.len(),
        scene.arrows.len()
    );

    println!("{}", tracker.output().render());
    ExitCode::SUCCESS
}
