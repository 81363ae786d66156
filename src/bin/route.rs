use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;

use shortest_route::network::{load_graph, pune_campus_network};
use shortest_route::service::{ErrorResponse, NearestResponse};
use shortest_route::{Coordinate, Graph, RoutePlanner, RouteRequest};


#[derive(Parser)]
#[command(version, about = "Shortest distance between named locations", long_about = None)]
struct Cli {
    /// JSON network definition, the built-in Pune network when omitted
    #[arg(short, long, value_name = "PATH")]
    network: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every location with its coordinate
    Locations,
    /// Shortest path between two locations
    Path {
        start: String,
        end: String,
    },
    /// Location closest to a coordinate
    Nearest {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let graph: Graph = match &cli.network {
        Some(path) => load_graph(path)
            .with_context(|| format!("failed to load network {}", path.display()))?,
        None => pune_campus_network().context("built-in network is invalid")?,
    };
    let planner = RoutePlanner::new(graph)?;
    info!(
        "Route planner ready with {} locations and {} roads",
        planner.graph().len(),
        planner.graph().edge_count()
    );

    match cli.command {
        Command::Locations => print_json(&planner.locations(), cli.pretty)?,
        Command::Path { start, end } => {
            info!("Routing {start} -> {end}");
            match planner.route(&RouteRequest::new(start, end)) {
                Ok(response) => print_json(&response, cli.pretty)?,
                Err(error) => {
                    print_json(&ErrorResponse::from(&error), cli.pretty)?;
                    std::process::exit(1);
                }
            }
        }
        Command::Nearest { lat, lng } => {
            match planner.nearest(Coordinate::new(lat, lng)) {
                Ok(Some(location)) => print_json(&NearestResponse::from(location), cli.pretty)?,
                Ok(None) => anyhow::bail!("network has no locations"),
                Err(error) => {
                    print_json(&ErrorResponse::from(&error), cli.pretty)?;
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
