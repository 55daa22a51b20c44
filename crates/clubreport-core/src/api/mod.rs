//! REST API client module for Sqorz race results.
//!
//! This module provides the `SqorzClient` for fetching club event summaries
//! and series rankings from the public Sqorz JSON API. No authentication is
//! required.

pub mod client;
pub mod error;

pub use client::{ApiConfig, SqorzClient};
pub use error::ApiError;
