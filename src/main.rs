// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wahoo data exporter CLI
//!
//! Scrapes a user's Wahoo fitness data with an existing access token,
//! prints a summary report, and optionally exports the snapshot to JSON
//! and/or the activities to CSV.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wahoo_exporter::error::Result;
use wahoo_exporter::models::Snapshot;
use wahoo_exporter::services::{export, DataScraper, WahooClient};

#[derive(Parser, Debug)]
#[command(name = "wahoo-exporter", version, about = "Scrape and export Wahoo fitness data")]
struct Args {
    /// Wahoo access token
    #[arg(long, env = "WAHOO_ACCESS_TOKEN")]
    token: String,

    /// Number of activities to fetch
    #[arg(long, default_value_t = 100)]
    limit: u32,

    /// Export the full snapshot to a JSON file
    #[arg(long)]
    export_json: bool,

    /// Export activities to a CSV file
    #[arg(long)]
    export_csv: bool,

    /// Suppress non-error console output
    #[arg(long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.quiet);

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Scrape failed");
            if e.is_auth_error() {
                tracing::error!("Access token was rejected; run wahoo-auth to obtain a new one");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<()> {
    let client = WahooClient::new(args.token.clone())?;
    let scraper = DataScraper::new(client);

    let snapshot = scraper.scrape_all(args.limit).await?;

    if !args.quiet {
        print_summary(&snapshot);
    }

    if args.export_json {
        export::export_json(&snapshot, None)?;
    }

    if args.export_csv {
        export::export_activities_csv(&snapshot, None)?;
    }

    Ok(())
}

/// Print a formatted snapshot summary to the console.
fn print_summary(snapshot: &Snapshot) {
    let summary = &snapshot.summary;
    let user = &snapshot.user;

    println!("\n{}", "=".repeat(50));
    println!("WAHOO FITNESS DATA SUMMARY");
    println!("{}", "=".repeat(50));
    println!("User: {} {}", user.first_name, user.last_name);
    println!("Email: {}", user.email);
    println!("Scraped: {}", snapshot.scraped_at);

    println!("\nOVERALL STATISTICS:");
    println!("  Total Activities: {}", summary.total_activities);
    println!("  Total Distance: {} km", summary.total_distance_km);
    println!("  Total Calories: {}", summary.total_calories);
    println!("  Total Duration: {} hours", summary.total_duration_hours);
    println!("  Average Heart Rate: {} bpm", summary.avg_heart_rate);

    println!("\nACTIVITIES BY SPORT:");
    for (sport, count) in &summary.activities_by_sport {
        println!("  {}: {}", sport, count);
    }

    println!("\nCONNECTED DEVICES: {}", snapshot.devices.len());
    for device in &snapshot.devices {
        println!(
            "  {} ({}) - Battery: {}%",
            device.name, device.device_type, device.battery_level
        );
    }

    println!("\nRECENT ACTIVITIES:");
    for activity in summary.recent_activities.iter().take(3) {
        let date = activity
            .start_time
            .split('T')
            .next()
            .unwrap_or(&activity.start_time);
        println!("  {} ({}) - {}", activity.name, activity.sport, date);
    }
    println!("{}", "=".repeat(50));
}

/// Initialize console logging; `--quiet` raises the default level to warn.
fn init_logging(quiet: bool) {
    let default_filter = if quiet { "warn" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
