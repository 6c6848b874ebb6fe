use anyhow::{Context, Result};
use clap::Parser;
use funfact::{FactClient, Session};
use std::io;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "funfact", version)]
#[command(about = "Print random fun facts, one at a time, until you say stop")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    // Exit status is 0 however the session ends.
    if let Err(e) = run() {
        println!("An unexpected error occurred: {:#}", e);
    }
}

fn run() -> Result<()> {
    ctrlc::set_handler(|| {
        println!("\n\nProgram interrupted. Goodbye! 👋");
        std::process::exit(0);
    })
    .context("Failed to install Ctrl-C handler")?;

    let client = FactClient::new()?;
    // Stdout stays unlocked so the Ctrl-C handler can still print.
    let summary = Session::new(client, io::stdin().lock(), io::stdout()).run()?;

    debug!(outcome = ?summary.outcome, displayed = summary.displayed, "session finished");
    Ok(())
}
