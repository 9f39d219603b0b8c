//! Command-line front end for the quote engine.
//!
//! Reads one quote form as JSON from the file named by the first argument,
//! or from stdin, and prints the quote.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use camp_quote::config::{AppConfig, OutputFormat};
use camp_quote::pricing::{compute_breakdown, requests::pool_offered, QuoteForm, QuoteResult};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args().nth(1);
    let form = read_form(path.as_deref().map(Path::new)).context("reading quote form")?;

    if !form.is_ready() {
        warn!(
            total_people = %form.total_people,
            nights = %form.nights,
            "Form is incomplete, quoting with defaults"
        );
    }

    let request = form.to_request();
    if request.wants_pool && !pool_offered(request.is_summer) {
        warn!("Pool is only offered June-August, ignoring pool request");
    }

    let breakdown = compute_breakdown(&request);
    info!(total_cost = %breakdown.total_cost, "Quote computed");

    let quote = QuoteResult::from(breakdown);
    let output = match (config.output, config.breakdown) {
        (OutputFormat::Json, true) => serde_json::to_string_pretty(&breakdown)?,
        (OutputFormat::Json, false) => serde_json::to_string_pretty(&quote)?,
        (OutputFormat::Text, true) => format!(
            "{}\n\n{}",
            quote,
            serde_json::to_string_pretty(&breakdown)?
        ),
        (OutputFormat::Text, false) => quote.to_string(),
    };
    println!("{}", output);

    Ok(())
}

fn read_form(path: Option<&Path>) -> camp_quote::Result<QuoteForm> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if raw.trim().is_empty() {
        return Ok(QuoteForm::default());
    }

    Ok(serde_json::from_str(&raw)?)
}
