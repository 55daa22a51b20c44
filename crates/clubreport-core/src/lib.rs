//! Core library for the club membership reporter.
//!
//! The pipeline is a straight line:
//!
//! 1. [`parser`] reads the TidyHQ contacts export into [`models::MemberRecord`]s
//! 2. [`reconcile`] folds those rows into one [`models::Contact`] per member
//! 3. [`aggregate`] derives totals, breakdowns and credential lists
//! 4. [`report`] writes each aggregate as a CSV file
//!
//! Event and series data come from the Sqorz API through [`api::SqorzClient`].

pub mod aggregate;
pub mod api;
pub mod config;
pub mod dates;
pub mod error;
pub mod models;
pub mod parser;
pub mod reconcile;
pub mod report;

pub use error::{Error, Result};
