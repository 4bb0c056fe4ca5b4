use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::Parser;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eld_planner::api::{plan_trip, ApiResponse};
use eld_planner::haversine::HaversineRouter;
use eld_planner::ors::{OrsClient, OrsConfig};
use eld_planner::planner::TripPlanner;
use eld_planner::store::MemoryTripStore;

/// Plan a truck trip and print its legs and daily logs as JSON.
#[derive(Debug, Parser)]
#[command(name = "plan-trip", version)]
struct Args {
    /// Where the driver is now.
    #[arg(long)]
    current: String,
    /// Where the load is picked up.
    #[arg(long)]
    pickup: String,
    /// Where the load is delivered.
    #[arg(long)]
    dropoff: String,
    /// Hours already used in the current duty cycle.
    #[arg(long)]
    cycle_used: f64,
    /// Date of the first daily log (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    start_date: Option<NaiveDate>,
    /// Estimate the route from straight-line distance instead of asking
    /// the routing service.
    #[arg(long)]
    straight_line: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eld_planner=info".into()),
        )
        .init();

    let args = Args::parse();
    let start_date = args.start_date.unwrap_or_else(|| Local::now().date_naive());
    let body = json!({
        "current_location": args.current,
        "pickup_location": args.pickup,
        "dropoff_location": args.dropoff,
        "current_cycle_used": args.cycle_used,
    });

    let geocoder = match OrsConfig::from_env().and_then(OrsClient::new) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut store = MemoryTripStore::new();
    let response = if args.straight_line {
        let planner = TripPlanner::new(geocoder, HaversineRouter::default());
        plan_trip(&planner, &mut store, &body, start_date)
    } else {
        let planner = TripPlanner::new(geocoder.clone(), geocoder);
        plan_trip(&planner, &mut store, &body, start_date)
    };

    print_response(&response)
}

fn print_response(response: &ApiResponse) -> ExitCode {
    match serde_json::to_string_pretty(&response.body) {
        Ok(text) => println!("{}", text),
        Err(err) => {
            eprintln!("failed to render response: {}", err);
            return ExitCode::FAILURE;
        }
    }

    if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
