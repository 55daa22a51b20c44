use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::record::ACTIVE_STATUS;
use crate::dates;

/// The three time-bounded qualifications tracked per member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    FirstAid,
    Coach,
    Official,
}

impl std::fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialKind::FirstAid => write!(f, "First Aid"),
            CredentialKind::Coach => write!(f, "Coach"),
            CredentialKind::Official => write!(f, "Official"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credential {
    /// Accreditation level, e.g. "Level 1 Coach". First aid has none.
    pub kind: Option<String>,
    pub expiry: String,
    /// Whether `expiry` had passed when the contacts were reconciled.
    pub expired: bool,
}

impl Credential {
    pub fn new(kind: Option<String>, expiry: &str, now: DateTime<Utc>) -> Self {
        Self {
            kind,
            expiry: expiry.to_string(),
            expired: dates::is_expired(expiry, now),
        }
    }

    pub fn kind_str(&self) -> &str {
        self.kind.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Membership {
    pub name: String,
    pub status: String,
}

impl Membership {
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }
}

/// A member, reconciled from every export row carrying their member number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name: String,
    pub member_no: String,
    pub active: bool,
    pub date_of_birth: Option<String>,
    /// Membership level that made this contact a riding member.
    pub race: Option<String>,
    /// Membership level that made this contact a volunteer.
    pub volunteer: Option<String>,
    pub first_aid: Option<Credential>,
    pub coach: Option<Credential>,
    pub official: Option<Credential>,
    pub member_levels: Vec<Membership>,
}

impl Contact {
    pub fn new(name: &str, member_no: &str, date_of_birth: &str) -> Self {
        Self {
            name: name.to_string(),
            member_no: member_no.to_string(),
            active: false,
            date_of_birth: Some(date_of_birth.to_string()).filter(|d| !d.is_empty()),
            race: None,
            volunteer: None,
            first_aid: None,
            coach: None,
            official: None,
            member_levels: Vec::new(),
        }
    }

    pub fn credential(&self, kind: CredentialKind) -> Option<&Credential> {
        match kind {
            CredentialKind::FirstAid => self.first_aid.as_ref(),
            CredentialKind::Coach => self.coach.as_ref(),
            CredentialKind::Official => self.official.as_ref(),
        }
    }

    pub fn credential_mut(&mut self, kind: CredentialKind) -> &mut Option<Credential> {
        match kind {
            CredentialKind::FirstAid => &mut self.first_aid,
            CredentialKind::Coach => &mut self.coach,
            CredentialKind::Official => &mut self.official,
        }
    }

    pub fn is_racing(&self) -> bool {
        self.race.is_some()
    }

    pub fn is_volunteer(&self) -> bool {
        self.volunteer.is_some()
    }

    /// "Yes"/"No" as printed in the credential reports.
    pub fn licensed(&self) -> &'static str {
        if self.active {
            "Yes"
        } else {
            "No"
        }
    }

    pub fn birth_year(&self) -> Option<i32> {
        self.date_of_birth.as_deref().and_then(dates::year_of)
    }
}

/// Contacts keyed by member number, iterated in the order members first
/// appeared in the export.
#[derive(Debug, Clone, Default)]
pub struct ContactMap {
    contacts: Vec<Contact>,
    index: HashMap<String, usize>,
}

impl ContactMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, member_no: &str) -> Option<&Contact> {
        self.index.get(member_no).map(|&i| &self.contacts[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Fetch the contact for a member number, creating it with `create` on
    /// first sight.
    pub fn get_or_insert_with<F>(&mut self, member_no: &str, create: F) -> &mut Contact
    where
        F: FnOnce() -> Contact,
    {
        let i = match self.index.get(member_no) {
            Some(&i) => i,
            None => {
                self.contacts.push(create());
                let i = self.contacts.len() - 1;
                self.index.insert(member_no.to_string(), i);
                i
            }
        };
        &mut self.contacts[i]
    }
}

impl<'a> IntoIterator for &'a ContactMap {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}

impl FromIterator<Contact> for ContactMap {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        let mut map = ContactMap::new();
        for contact in iter {
            match map.index.get(&contact.member_no) {
                Some(&i) => map.contacts[i] = contact,
                None => {
                    map.index.insert(contact.member_no.clone(), map.contacts.len());
                    map.contacts.push(contact);
                }
            }
        }
        map
    }
}
