use std::path::{Path, PathBuf};

use tracing::debug;

use super::rows::{self, CsvReport};
use crate::aggregate::{ContactTotals, CurrentExpired, MemberLevelBreakdown};
use crate::error::Result;
use crate::models::{ClubEvent, Contact, SeriesResult};

/// Writes report CSVs into a single output directory, replacing any file of
/// the same name.
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// Use `output_dir`, creating it if missing.
    pub fn new(output_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Use `output_dir` after wiping anything a previous run left there.
    pub fn fresh(output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            debug!(dir = %output_dir.display(), "Removing previous output");
            std::fs::remove_dir_all(&output_dir)?;
        }
        Self::new(output_dir)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn report_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.csv", name))
    }

    fn write<I>(&self, name: &str, headers: &[&str], records: I) -> Result<PathBuf>
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let path = self.report_path(name);
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(headers)?;
        let mut count = 0;
        for record in records {
            writer.write_record(&record)?;
            count += 1;
        }
        writer.flush()?;
        debug!(path = %path.display(), rows = count, "Wrote report");
        Ok(path)
    }

    fn write_items<T: CsvReport>(&self, name: &str, items: &[T]) -> Result<PathBuf> {
        self.write(name, T::HEADERS, items.iter().map(T::record))
    }

    // ===== Membership =====

    pub fn write_totals(&self, totals: &ContactTotals) -> Result<PathBuf> {
        self.write("member-totals", rows::TOTALS_HEADERS, rows::totals_rows(totals))
    }

    pub fn write_member_level_breakdown(&self, breakdown: &MemberLevelBreakdown) -> Result<PathBuf> {
        self.write(
            "membership-breakdown",
            rows::BREAKDOWN_HEADERS,
            breakdown
                .iter()
                .map(|(name, count)| vec![name.to_string(), count.to_string()]),
        )
    }

    pub fn write_sprocket_graduates(&self, sprockets: &[&Contact]) -> Result<PathBuf> {
        self.write(
            "grad-sprockets",
            Contact::HEADERS,
            sprockets.iter().map(|c| c.record()),
        )
    }

    /// Write `{prefix}-current.csv` and `{prefix}-expired.csv`. An empty list
    /// produces no file; the paths actually written are returned.
    pub fn write_current_expired<T: CsvReport>(
        &self,
        items: &CurrentExpired<T>,
        prefix: &str,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for (bucket, list) in [("current", &items.current), ("expired", &items.expired)] {
            let name = format!("{}-{}", prefix, bucket);
            if list.is_empty() {
                debug!(report = %name, "Nothing to report, skipping");
                continue;
            }
            written.push(self.write_items(&name, list)?);
        }
        Ok(written)
    }

    // ===== Sqorz =====

    pub fn write_event_breakdown(&self, events: &[ClubEvent]) -> Result<PathBuf> {
        self.write_items("event-breakdown", events)
    }

    pub fn write_series_breakdown(&self, series: &SeriesResult) -> Result<PathBuf> {
        self.write(
            &format!("series-{}", series.id),
            rows::SERIES_HEADERS,
            rows::series_rows(series),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::FirstAider;
    use tempfile::tempdir;

    fn read_back(path: &Path) -> Vec<Vec<String>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();
        rdr.records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect()
    }

    fn aider(name: &str) -> FirstAider {
        FirstAider {
            name: name.to_string(),
            expiry: "2025-03-01".to_string(),
            licensed: "Yes".to_string(),
        }
    }

    #[test]
    fn test_totals_round_trip() {
        let dir = tempdir().unwrap();
        let writer = ReportWriter::new(dir.path().to_path_buf()).unwrap();
        let totals = ContactTotals {
            total_active: 12,
            total_riding: 9,
            ..ContactTotals::default()
        };

        let path = writer.write_totals(&totals).unwrap();
        assert_eq!(path, dir.path().join("member-totals.csv"));

        let rows = read_back(&path);
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0], vec!["Type", "Total"]);
        assert_eq!(rows[1], vec!["Active Members (Race + Volunteer)", "12"]);
        assert_eq!(rows[3], vec!["Active Riding Members", "9"]);
    }

    #[test]
    fn test_empty_bucket_is_skipped() {
        let dir = tempdir().unwrap();
        let writer = ReportWriter::new(dir.path().to_path_buf()).unwrap();
        let items = CurrentExpired {
            current: vec![aider("Jo, Smith")],
            expired: vec![],
        };

        let written = writer.write_current_expired(&items, "first-aid").unwrap();
        assert_eq!(written, vec![dir.path().join("first-aid-current.csv")]);
        assert!(!dir.path().join("first-aid-expired.csv").exists());

        let rows = read_back(&written[0]);
        assert_eq!(rows[0], vec!["Name", "Expiry", "Licensed"]);
        assert_eq!(rows[1], vec!["Jo, Smith", "2025-03-01", "Yes"]);
    }

    #[test]
    fn test_existing_report_is_overwritten() {
        let dir = tempdir().unwrap();
        let writer = ReportWriter::new(dir.path().to_path_buf()).unwrap();
        writer.write_event_breakdown(&[]).unwrap();
        std::fs::write(dir.path().join("event-breakdown.csv"), "stale,data\nmore,rows\n").unwrap();

        let path = writer.write_event_breakdown(&[]).unwrap();
        assert_eq!(
            read_back(&path),
            vec![vec!["Name", "Date", "Total Entries", "Total Classes", "Total Races"]]
        );
    }

    #[test]
    fn test_fresh_wipes_previous_run() {
        let dir = tempdir().unwrap();
        let year_dir = dir.path().join("2024");
        std::fs::create_dir_all(&year_dir).unwrap();
        std::fs::write(year_dir.join("old.csv"), "x").unwrap();

        let writer = ReportWriter::fresh(year_dir.clone()).unwrap();
        assert_eq!(writer.output_dir(), year_dir.as_path());
        assert!(year_dir.exists());
        assert!(!year_dir.join("old.csv").exists());
    }
}
