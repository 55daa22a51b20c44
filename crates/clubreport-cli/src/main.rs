//! club-report - membership, credential and event CSV reports for a BMX club.
//!
//! Usage: `club-report <contacts-file> <organization-id> <year>`

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use clubreport_cli::{init_tracing, run_club_report, ClubReportJob};
use clubreport_core::config::Config;

#[derive(Parser)]
#[command(version, about = "Generate the yearly membership and event reports")]
struct Cli {
    /// TidyHQ contacts export (CSV, no header row)
    contacts_file: PathBuf,
    /// Sqorz organization identifier
    organization: String,
    /// Reporting year
    year: i32,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load()?;

    let job = ClubReportJob {
        contacts_file: cli.contacts_file,
        organization: cli.organization,
        year: cli.year,
    };
    run_club_report(&job, &config).await?;
    Ok(())
}
