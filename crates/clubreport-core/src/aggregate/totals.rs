use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::dates;
use crate::models::{Contact, ContactMap, CredentialKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContactTotals {
    pub total_active: usize,
    pub total_expired: usize,
    pub total_riding: usize,
    pub total_volunteers: usize,
    pub total_riding_volunteers: usize,
    pub total_first_aid: usize,
    pub total_expired_first_aid: usize,
    pub total_coaches: usize,
    pub total_expired_coaches: usize,
    pub total_officials: usize,
    pub total_expired_officials: usize,
}

impl ContactTotals {
    fn count_credential(&mut self, contact: &Contact, kind: CredentialKind, year: i32, now: DateTime<Utc>) {
        let Some(credential) = contact.credential(kind) else {
            return;
        };
        let expired = !contact.active || dates::expired_in_year(&credential.expiry, year, now);
        let (current_total, expired_total) = match kind {
            CredentialKind::FirstAid => (&mut self.total_first_aid, &mut self.total_expired_first_aid),
            CredentialKind::Coach => (&mut self.total_coaches, &mut self.total_expired_coaches),
            CredentialKind::Official => (&mut self.total_officials, &mut self.total_expired_officials),
        };
        if expired {
            *expired_total += 1;
        } else {
            *current_total += 1;
        }
    }
}

/// Headline membership and credential counts for the reporting year.
///
/// Membership counts follow the race/volunteer flags. A credential is
/// counted as expired when its holder is no longer active, or when it lapsed
/// during `reporting_year` before `now`.
pub fn totals(contacts: &ContactMap, reporting_year: i32, now: DateTime<Utc>) -> ContactTotals {
    let mut res = ContactTotals::default();

    for contact in contacts {
        if contact.is_racing() || contact.is_volunteer() {
            res.total_active += 1;
        } else {
            res.total_expired += 1;
        }

        match (contact.is_racing(), contact.is_volunteer()) {
            (true, true) => res.total_riding_volunteers += 1,
            (true, false) => res.total_riding += 1,
            (false, true) => res.total_volunteers += 1,
            (false, false) => {}
        }

        for kind in [CredentialKind::FirstAid, CredentialKind::Coach, CredentialKind::Official] {
            res.count_credential(contact, kind, reporting_year, now);
        }
    }

    res
}
