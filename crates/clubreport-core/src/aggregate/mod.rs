//! Pure aggregations over a reconciled `ContactMap`.
//!
//! Nothing here mutates the contacts; each function returns a fresh value
//! that a report writer can serialize.

pub mod credentials;
pub mod roster;
pub mod totals;

pub use credentials::{
    club_coaches, club_first_aiders, club_officials, current_expired, CredentialHolder,
    CurrentExpired, FirstAider,
};
pub use roster::{member_level_breakdown, sprocket_graduates, MemberLevelBreakdown};
pub use totals::{totals, ContactTotals};
