use crate::aggregate::{ContactTotals, CredentialHolder, FirstAider};
use crate::models::{ClubEvent, Contact, SeriesResult};

/// A value that renders as one row of a CSV report.
pub trait CsvReport {
    const HEADERS: &'static [&'static str];

    fn record(&self) -> Vec<String>;
}

impl CsvReport for FirstAider {
    const HEADERS: &'static [&'static str] = &["Name", "Expiry", "Licensed"];

    fn record(&self) -> Vec<String> {
        vec![self.name.clone(), self.expiry.clone(), self.licensed.clone()]
    }
}

impl CsvReport for CredentialHolder {
    const HEADERS: &'static [&'static str] = &["Name", "Type", "Expiry", "Licensed"];

    fn record(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.kind.clone(),
            self.expiry.clone(),
            self.licensed.clone(),
        ]
    }
}

/// Sprocket graduates are listed straight from their contact.
impl CsvReport for Contact {
    const HEADERS: &'static [&'static str] = &["Name", "DoB"];

    fn record(&self) -> Vec<String> {
        vec![self.name.clone(), self.date_of_birth.clone().unwrap_or_default()]
    }
}

impl CsvReport for ClubEvent {
    const HEADERS: &'static [&'static str] =
        &["Name", "Date", "Total Entries", "Total Classes", "Total Races"];

    fn record(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.date.clone(),
            self.entries.to_string(),
            self.classes_count.to_string(),
            self.complete_races.to_string(),
        ]
    }
}

pub const TOTALS_HEADERS: &[&str] = &["Type", "Total"];

/// The eleven labelled rows of `member-totals.csv`.
pub fn totals_rows(totals: &ContactTotals) -> Vec<Vec<String>> {
    [
        ("Active Members (Race + Volunteer)", totals.total_active),
        ("Expired Members", totals.total_expired),
        ("Active Riding Members", totals.total_riding),
        ("Active Volunteer Members", totals.total_volunteers),
        ("Active Riding + Volunteer Members", totals.total_riding_volunteers),
        ("First Aiders", totals.total_first_aid),
        ("First Aiders Expired", totals.total_expired_first_aid),
        ("Coaches", totals.total_coaches),
        ("Coaches Expired", totals.total_expired_coaches),
        ("Officials", totals.total_officials),
        ("Officials Expired", totals.total_expired_officials),
    ]
    .into_iter()
    .map(|(label, count)| vec![label.to_string(), count.to_string()])
    .collect()
}

pub const BREAKDOWN_HEADERS: &[&str] = &["Membership Type", "Count"];

pub const SERIES_HEADERS: &[&str] = &["Class", "First Name", "Last Name", "Rank"];

/// One row per qualified rider, classes in API order.
pub fn series_rows(series: &SeriesResult) -> Vec<Vec<String>> {
    series
        .classes
        .iter()
        .flat_map(|class| {
            class.qualified_riders.iter().map(move |rider| {
                vec![
                    class.class_name.clone(),
                    rider.first_name.clone(),
                    rider.last_name.clone(),
                    rider.rank.to_string(),
                ]
            })
        })
        .collect()
}
