//! Folds export rows into one `Contact` per member number.
//!
//! The export repeats a member once per membership they hold, so a member can
//! appear on several rows with different levels, statuses and credential
//! dates. Rules applied per row, in file order:
//!
//! - an "Active" row marks the contact active and may set `race`/`volunteer`
//!   (the last active row wins)
//! - a credential is only replaced when the contact has none or the one held
//!   has expired
//! - every row is appended to `member_levels`

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{Contact, ContactMap, Credential, CredentialKind, MemberRecord, Membership};

const NON_RIDING: &str = "Non-Riding";

/// Build the contact map from rows in file order, judging credential expiry
/// against `now`.
pub fn reconcile(records: &[MemberRecord], now: DateTime<Utc>) -> ContactMap {
    let mut contacts = ContactMap::new();
    for record in records {
        let contact = contacts.get_or_insert_with(&record.member_no, || {
            Contact::new(&record.name, &record.member_no, &record.date_of_birth)
        });
        apply(contact, record, now);
    }
    debug!(rows = records.len(), contacts = contacts.len(), "Reconciled contacts");
    contacts
}

fn apply(contact: &mut Contact, record: &MemberRecord, now: DateTime<Utc>) {
    let level = &record.member_level;

    if record.is_active() {
        if grants_race(level) {
            contact.race = Some(level.clone());
        }
        if grants_volunteer(level) {
            contact.volunteer = Some(level.clone());
        }
        contact.active = true;
    }

    if !record.first_aid_expiry.is_empty() {
        supersede(contact, CredentialKind::FirstAid, || {
            Credential::new(None, &record.first_aid_expiry, now)
        });
    }
    if !record.coaching_level.is_empty() {
        supersede(contact, CredentialKind::Coach, || {
            Credential::new(Some(record.coaching_level.clone()), &record.coaching_expiry, now)
        });
    }
    if !record.official_level.is_empty() {
        supersede(contact, CredentialKind::Official, || {
            Credential::new(Some(record.official_level.clone()), &record.official_expiry, now)
        });
    }

    contact.member_levels.push(Membership {
        name: level.clone(),
        status: record.status.clone(),
    });
}

/// Replace the credential only when none is held or the held one has expired.
fn supersede<F>(contact: &mut Contact, kind: CredentialKind, candidate: F)
where
    F: FnOnce() -> Credential,
{
    let slot = contact.credential_mut(kind);
    if slot.as_ref().map_or(true, |held| held.expired) {
        *slot = Some(candidate());
    }
}

/// Riding memberships are everything except add-ons, Cycling Australia
/// ("CA...") memberships and non-riding volunteers.
pub fn grants_race(level: &str) -> bool {
    !level.to_lowercase().contains("add-on") && !level.starts_with("CA") && !grants_volunteer(level)
}

pub fn grants_volunteer(level: &str) -> bool {
    level.contains(NON_RIDING)
}
