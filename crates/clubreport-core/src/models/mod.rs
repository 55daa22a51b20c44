//! Data models for club reporting.
//!
//! This module contains the data structures used throughout the pipeline:
//!
//! - `MemberRecord`: one raw row of the TidyHQ contacts export
//! - `Contact`, `Credential`, `Membership`, `ContactMap`: reconciled members
//! - `ClubEvent`: Sqorz club event summaries
//! - `SeriesResult`, `SeriesClassResult`, `QualifiedRider`: series rankings

pub mod contact;
pub mod event;
pub mod record;
pub mod series;

pub use contact::{Contact, ContactMap, Credential, CredentialKind, Membership};
pub use event::{ClubEvent, ClubEventsResponse, SqorzEvent};
pub use record::MemberRecord;
pub use series::{
    QualifiedRider, SeriesClassResult, SeriesResponse, SeriesResult, SeriesStatus,
    SqorzSeriesClass,
};
