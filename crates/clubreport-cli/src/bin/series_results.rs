//! series-results - qualified riders per class for a Sqorz series.
//!
//! Usage: `series-results <series-id>`

use anyhow::Result;
use clap::Parser;

use clubreport_cli::{init_tracing, run_series_results};
use clubreport_core::config::Config;

#[derive(Parser)]
#[command(version, about = "Export the qualified riders of a race series")]
struct Cli {
    /// Sqorz series identifier
    series_id: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load()?;

    run_series_results(&cli.series_id, &config).await?;
    Ok(())
}
