//! Playtime CLI
//!
//! Usage:
//!   playtime --records profiles.json --battletag "Tracer#1234"           # Estimates
//!   playtime --records profiles.json --battletag "Tracer#1234" --check   # Consistency check
//!   playtime --records profiles.json --battletag "Tracer#1234" --json    # JSON output
//!   playtime --serve --records profiles.json                             # HTTP API server

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use playtime::core::{
    run_server, validate_query, ConsistencyChecker, DurationReconstructor, FixtureSource,
    QueryParams, ServiceConfig,
};
use playtime::types::{CategoryRecords, CheckReport, Corroboration, Estimates};
use playtime::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "playtime",
    version = VERSION,
    about = "Recover precise hero playtime from truncated profile readings",
    long_about = "Profiles show hero playtime floored to a whole unit (\"10 hours\")\n\
                  next to a precise percent-of-total. Playtime anchors on the hero\n\
                  with the largest reading and rescales every other hero by its\n\
                  percent ratio.\n\n\
                  Modes:\n  \
                  (default)  Print estimates for one profile\n  \
                  --check    Compare estimates against the original readings\n  \
                  --serve    HTTP API server mode"
)]
struct Args {
    /// Fixture file with profile readings
    #[arg(short, long, env = "PLAYTIME_FIXTURES")]
    records: Option<PathBuf>,

    /// Battle tag of the profile to evaluate
    #[arg(short, long)]
    battletag: Option<String>,

    /// Region (us, eu, kr, cn)
    #[arg(long)]
    region: Option<String>,

    /// Platform (pc, psn, xbl)
    #[arg(long)]
    platform: Option<String>,

    /// Queue (competitive, quickplay)
    #[arg(long)]
    queue: Option<String>,

    /// Run the consistency check instead of printing estimates
    #[arg(short, long)]
    check: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (overrides the config file)
    #[arg(long, env = "PLAYTIME_ADDR")]
    addr: Option<String>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(&args)?;

    if args.serve {
        run_serve(config).await
    } else {
        run_single(&args, &config)
    }
}

/// Defaults, then the config file, then flags
fn load_config(args: &Args) -> Result<ServiceConfig> {
    let mut config = match &args.config {
        Some(path) => ServiceConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServiceConfig::default(),
    };

    if let Some(addr) = &args.addr {
        config.addr = addr.clone();
    }
    if let Some(records) = &args.records {
        config.fixtures = Some(records.clone());
    }

    Ok(config)
}

/// Evaluate one profile from the fixture file
fn run_single(args: &Args, config: &ServiceConfig) -> Result<()> {
    let Some(fixtures) = &config.fixtures else {
        bail!("no record file given (use --records or set fixtures in the config)");
    };
    let source = FixtureSource::load(fixtures)
        .with_context(|| format!("loading records from {}", fixtures.display()))?;

    let params = QueryParams {
        battletag: args.battletag.clone(),
        region: args.region.clone(),
        platform: args.platform.clone(),
        queue: args.queue.clone(),
    };
    let query = validate_query(&params, &config.defaults)?;
    let records = source.records_for(&query)?;
    info!(%query, heroes = records.len(), "Evaluating profile");

    if args.check {
        let report = ConsistencyChecker::new().check(&records)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&records, &report);
        }
    } else {
        let estimates = DurationReconstructor::new().estimate_all(&records)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&estimates)?);
        } else {
            print_estimates(&records, &estimates);
        }
    }

    Ok(())
}

/// Run HTTP API server
async fn run_serve(config: ServiceConfig) -> Result<()> {
    info!("Playtime v{} starting", VERSION);

    let source = match &config.fixtures {
        Some(path) => FixtureSource::load(path)
            .with_context(|| format!("loading records from {}", path.display()))?,
        None => {
            warn!("No fixture file configured, every profile lookup will miss");
            FixtureSource::new()
        }
    };

    run_server(&config, Arc::new(source))
        .await
        .with_context(|| format!("serving on {}", config.addr))
}

/// Format a duration as H:MM:SS.mmm
fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let seconds = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    format!("{}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}

fn name_width(records: &CategoryRecords) -> usize {
    records.categories().map(|name| name.chars().count()).max().unwrap_or(0)
}

/// Print estimates next to their readings
fn print_estimates(records: &CategoryRecords, estimates: &Estimates) {
    let width = name_width(records);
    println!("{}", "Estimated playtime".bold());

    for estimate in estimates.iter() {
        let reading = records
            .get(&estimate.category)
            .map(|r| {
                if r.is_unparseable() {
                    "unparseable".to_string()
                } else {
                    r.to_string()
                }
            })
            .unwrap_or_default();

        println!(
            "  {:<width$}  {}  {}",
            estimate.category,
            format!("{:>24}", reading).dimmed(),
            format_duration(estimate.duration_estimate).green(),
            width = width
        );
    }

    println!(
        "  {:<width$}  {:>24}  {}",
        "Total",
        "",
        format_duration(estimates.total()).bold(),
        width = width
    );
}

/// Print the consistency check table
fn print_report(records: &CategoryRecords, report: &CheckReport) {
    let width = name_width(records);
    println!("{}", "Consistency check".bold());

    for category in records.categories() {
        let line = match report.get(category) {
            Some(Corroboration::Exact) => "0  consistent".green(),
            Some(Corroboration::Below) => "-1 reported below estimate".yellow(),
            Some(Corroboration::Above) => "+1 reported above estimate".yellow(),
            None => "skipped (unrecognized unit)".dimmed(),
        };
        println!("  {:<width$}  {}", category, line, width = width);
    }

    if report.all_exact() {
        println!("{}", "All checked readings round-trip".green());
    } else {
        println!("{}", "Some readings fall outside their estimate's bucket".red());
    }
}
