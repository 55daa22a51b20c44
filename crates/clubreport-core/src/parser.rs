//! Reader for the headerless TidyHQ contacts export.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::record::{MemberRecord, RECORD_COLUMNS};

/// Read every row of the contacts export at `path`, in file order.
///
/// A missing file is reported before any parsing happens. An empty file
/// yields no records.
pub fn read_records(path: &Path) -> Result<Vec<MemberRecord>> {
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    let rdr = reader_builder().from_path(path)?;
    let records = parse(rdr).collect::<Result<Vec<_>>>()?;
    debug!(path = %path.display(), rows = records.len(), "Read contacts export");
    Ok(records)
}

/// Parse rows from an already opened reader.
pub fn parse<R>(rdr: csv::Reader<R>) -> impl Iterator<Item = Result<MemberRecord>>
where
    R: std::io::Read,
{
    rdr.into_records().map(|row| {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        // Column count is checked here rather than by the csv crate so the
        // error names the row instead of comparing against the first one.
        if row.len() != RECORD_COLUMNS {
            return Err(Error::Parse {
                line,
                reason: format!("expected {} columns, found {}", RECORD_COLUMNS, row.len()),
            });
        }

        let record: MemberRecord = row.deserialize(None)?;
        if record.member_no.is_empty() {
            return Err(Error::Parse {
                line,
                reason: "missing member number".to_string(),
            });
        }
        Ok(record)
    })
}

/// Reader settings for the export: no header row, rows checked individually.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true);
    builder
}
