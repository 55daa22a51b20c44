use serde::Serialize;

use crate::models::{Contact, ContactMap, CredentialKind};

/// Holders of one credential, split by whether it can be relied on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentExpired<T> {
    pub current: Vec<T>,
    pub expired: Vec<T>,
}

impl<T> Default for CurrentExpired<T> {
    fn default() -> Self {
        Self {
            current: Vec::new(),
            expired: Vec::new(),
        }
    }
}

impl<T> CurrentExpired<T> {
    pub fn len(&self) -> usize {
        self.current.len() + self.expired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FirstAider {
    pub name: String,
    pub expiry: String,
    pub licensed: String,
}

/// A coach or official with their accreditation level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialHolder {
    pub name: String,
    pub kind: String,
    pub expiry: String,
    pub licensed: String,
}

/// Bucket every contact holding `kind` into current or expired, projecting
/// each with `project`. A holder whose membership lapsed is always expired.
pub fn current_expired<T, F>(contacts: &ContactMap, kind: CredentialKind, project: F) -> CurrentExpired<T>
where
    F: Fn(&Contact) -> T,
{
    let mut res = CurrentExpired::default();
    for contact in contacts {
        let Some(credential) = contact.credential(kind) else {
            continue;
        };
        let item = project(contact);
        if !contact.active || credential.expired {
            res.expired.push(item);
        } else {
            res.current.push(item);
        }
    }
    res
}

pub fn club_first_aiders(contacts: &ContactMap) -> CurrentExpired<FirstAider> {
    current_expired(contacts, CredentialKind::FirstAid, |c| FirstAider {
        name: c.name.clone(),
        expiry: c.first_aid.as_ref().map(|fa| fa.expiry.clone()).unwrap_or_default(),
        licensed: c.licensed().to_string(),
    })
}

pub fn club_coaches(contacts: &ContactMap) -> CurrentExpired<CredentialHolder> {
    current_expired(contacts, CredentialKind::Coach, |c| holder(c, CredentialKind::Coach))
}

pub fn club_officials(contacts: &ContactMap) -> CurrentExpired<CredentialHolder> {
    current_expired(contacts, CredentialKind::Official, |c| holder(c, CredentialKind::Official))
}

fn holder(contact: &Contact, kind: CredentialKind) -> CredentialHolder {
    let credential = contact.credential(kind);
    CredentialHolder {
        name: contact.name.clone(),
        kind: credential.map(|cr| cr.kind_str().to_string()).unwrap_or_default(),
        expiry: credential.map(|cr| cr.expiry.clone()).unwrap_or_default(),
        licensed: contact.licensed().to_string(),
    }
}
