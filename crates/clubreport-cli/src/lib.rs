//! Orchestration for the `club-report` and `series-results` binaries.
//!
//! Each run loads configuration, does its work strictly in sequence and stops
//! at the first failure. Reports written before a failure stay on disk.

use std::io;
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use clubreport_core::aggregate;
use clubreport_core::api::SqorzClient;
use clubreport_core::config::Config;
use clubreport_core::parser;
use clubreport_core::reconcile::reconcile;
use clubreport_core::report::ReportWriter;

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

/// Inputs for a membership and event report run.
#[derive(Debug, Clone)]
pub struct ClubReportJob {
    pub contacts_file: PathBuf,
    pub organization: String,
    pub year: i32,
}

/// Build the membership and event report set for one reporting year into
/// `{output_root}/{year}`, replacing that directory's previous contents.
pub async fn run_club_report(job: &ClubReportJob, config: &Config) -> Result<PathBuf> {
    let now = config.evaluation_time()?;
    info!("Generating report for: {} ({})", job.organization, job.year);
    info!("  - Using {}", job.contacts_file.display());
    debug!(as_of = %now, "Evaluating credential expiry");

    // --------------- Process Contacts -------------------

    let records = parser::read_records(&job.contacts_file)?;
    let contacts = reconcile(&records, now);
    info!("{} contacts found", contacts.len());

    let totals = aggregate::totals(&contacts, job.year, now);
    info!(?totals, "Membership breakdown");

    let levels = aggregate::member_level_breakdown(&contacts);
    for (level, count) in levels.iter() {
        info!(level = level, count = count, "Membership level");
    }

    let sprockets = aggregate::sprocket_graduates(&contacts, job.year);
    let first_aiders = aggregate::club_first_aiders(&contacts);
    let coaches = aggregate::club_coaches(&contacts);
    let officials = aggregate::club_officials(&contacts);

    // --------------- Fetch Events -------------------

    info!("Generating event information... This may take a moment...");
    let client = SqorzClient::new(&config.api_config())?;
    let events = client
        .fetch_club_events(&job.organization, job.year)
        .await
        .with_context(|| format!("Failed to fetch events for {}", job.organization))?;
    info!("{} club events found", events.len());

    // --------------- Write Reports -------------------

    let output_dir = config.output_root().join(job.year.to_string());
    let writer = ReportWriter::fresh(output_dir)
        .context("Failed to prepare the output directory")?;
    info!("Writing CSVs to the output dir: {}", writer.output_dir().display());

    writer.write_totals(&totals)?;
    writer.write_current_expired(&first_aiders, "first-aid")?;
    writer.write_current_expired(&coaches, "coaches")?;
    writer.write_current_expired(&officials, "officials")?;
    writer.write_member_level_breakdown(&levels)?;
    writer.write_sprocket_graduates(&sprockets)?;
    writer.write_event_breakdown(&events)?;

    info!("Done");
    Ok(writer.output_dir().to_path_buf())
}

/// Series ids become both a URL path segment and part of a file name.
fn is_plain_segment(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && id.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Write the qualified riders of a series to `{output_root}/series-{id}.csv`.
pub async fn run_series_results(series_id: &str, config: &Config) -> Result<PathBuf> {
    ensure!(
        is_plain_segment(series_id),
        "Invalid series id {:?}: expected letters, digits, '-', '_' or '.'",
        series_id
    );
    info!("Loading series results for {}", series_id);

    let client = SqorzClient::new(&config.api_config())?;
    let results = client
        .fetch_series_leaders(series_id)
        .await
        .with_context(|| format!("Failed to fetch series {}", series_id))?;
    info!(
        "  > Found series: {} with {} classes",
        results.name,
        results.classes.len()
    );

    let writer = ReportWriter::new(config.output_root())
        .context("Failed to prepare the output directory")?;
    let path = writer.write_series_breakdown(&results)?;

    info!("Done");
    Ok(path)
}
