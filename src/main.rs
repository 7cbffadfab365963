//! Name Sweep - resumable brute-force handle availability scanner

use clap::Parser;
use name_sweep::{cli::Cli, Result, Sweeper};
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize the library
    if let Err(e) = name_sweep::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    // Diagnostics go to stderr, stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

/// Main sweep workflow
async fn run(cli: Cli) -> Result<()> {
    let json = cli.json;
    let config = cli.into_config()?;
    let mut sweeper = Sweeper::new(config)?;

    sweeper
        .run(|report| {
            if json {
                println!("{}", serde_json::to_string(report)?);
            } else {
                println!("{}", report);
            }
            Ok(())
        })
        .await?;

    Ok(())
}
