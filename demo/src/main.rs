//! capkit showcase
//!
//! Drives each capkit entity and prints its output lines to stdout.
//!
//! Usage:
//!   capkit-demo --name Widget --value 42 --kind Sensor --data initial --write updated

use std::io::{self, Write};

use anyhow::{Context, Result};
use capkit_demo::{
    DEFAULT_DATA, DEFAULT_KIND, DEFAULT_NAME, ShowcaseConfig, run_showcase,
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "capkit-demo")]
#[command(about = "Showcase of named entities and composable capabilities")]
struct Args {
    /// Name shared by the valued entity and the typed processor
    #[arg(long, default_value = DEFAULT_NAME)]
    name: String,

    /// Integer carried by the valued entity
    #[arg(long, default_value_t = capkit_demo::DEFAULT_VALUE, allow_hyphen_values = true)]
    value: i32,

    /// Type tag of the typed processor
    #[arg(long, default_value = DEFAULT_KIND)]
    kind: String,

    /// Initial payload of the multi-capability entity
    #[arg(long, default_value = DEFAULT_DATA)]
    data: String,

    /// Payload to write before the final execute
    #[arg(long)]
    write: Option<String>,

    /// Print a JSON report of the final entity states
    #[arg(long)]
    json: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for ShowcaseConfig {
    fn from(args: Args) -> Self {
        Self {
            name: args.name,
            value: args.value,
            kind: args.kind,
            data: args.data,
            write: args.write,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let json = args.json;
    let config = ShowcaseConfig::from(args);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = run_showcase(&config, &mut out).context("showcase failed")?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        writeln!(out, "{rendered}").context("failed to write report")?;
    }

    info!(types = ?report.producible_types, "showcase complete");
    Ok(())
}
