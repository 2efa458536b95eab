// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wahoo OAuth helper CLI
//!
//! Non-interactive companion to wahoo-exporter. Without `--code` it
//! prints the authorization URL to open in a browser; with `--code` it
//! exchanges the pasted authorization code for an access token, saves
//! the token JSON for reuse, and verifies it with one profile fetch.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wahoo_exporter::config::Config;
use wahoo_exporter::error::Result;
use wahoo_exporter::services::{oauth, WahooClient};

#[derive(Parser, Debug)]
#[command(name = "wahoo-auth", version, about = "Wahoo OAuth authorization helper")]
struct Args {
    /// Authorization code from the redirect URL; omit to print the authorize URL
    #[arg(long)]
    code: Option<String>,

    /// Opaque state parameter to include in the authorize URL
    #[arg(long)]
    state: Option<String>,

    /// Where to save the token JSON
    #[arg(long, default_value = "wahoo_token.json")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Configuration error");
            return ExitCode::FAILURE;
        }
    };

    match run(&config, &args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "OAuth flow failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config, args: &Args) -> Result<()> {
    let Some(code) = args.code.as_deref() else {
        print_authorize_instructions(config, args.state.as_deref());
        return Ok(());
    };

    let token = oauth::exchange_code(config, code).await?;
    token.save(&args.output)?;

    println!("Access token saved to {}", args.output.display());
    println!("Token type: {}", token.token_type);
    println!("Expires in: {} seconds", token.expires_in);
    println!("Scope: {}", token.scope);

    // The token is already saved at this point, so a verification failure
    // is only worth a warning.
    match WahooClient::new(token.access_token.clone()) {
        Ok(client) => match client.get_user().await {
            Ok(user) => {
                println!("Token verified for {} {}", user.first_name, user.last_name);
            }
            Err(e) => tracing::warn!(error = %e, "Token verification failed"),
        },
        Err(e) => tracing::warn!(error = %e, "Token verification skipped"),
    }

    Ok(())
}

fn print_authorize_instructions(config: &Config, state: Option<&str>) {
    let url = oauth::authorize_url(config, state);

    println!("Authorization URL:");
    println!("{}", url);
    println!();
    println!("1. Open the URL above in your browser");
    println!("2. Log in to your Wahoo account and authorize the application");
    println!(
        "3. Copy the 'code' query parameter from the redirect to {}",
        config.redirect_uri
    );
    println!("4. Re-run: wahoo-auth --code <CODE>");
}

/// Initialize console logging.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
