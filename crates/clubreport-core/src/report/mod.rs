//! CSV report writers.
//!
//! Every report type declares its header row and row mapping once through
//! [`CsvReport`]; `ReportWriter` owns the output directory and the file
//! naming.

pub mod rows;
pub mod writer;

pub use rows::CsvReport;
pub use writer::ReportWriter;
