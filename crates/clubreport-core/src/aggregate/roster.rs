use std::collections::HashMap;

use crate::models::{Contact, ContactMap};

/// Age riders leave the Sprockets class.
const SPROCKET_GRADUATION_AGE: i32 = 8;

/// Count of active membership rows per level name, in the order each level
/// first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberLevelBreakdown {
    levels: Vec<(String, usize)>,
}

impl MemberLevelBreakdown {
    fn increment(&mut self, index: &mut HashMap<String, usize>, name: &str) {
        match index.get(name) {
            Some(&i) => self.levels[i].1 += 1,
            None => {
                index.insert(name.to_string(), self.levels.len());
                self.levels.push((name.to_string(), 1));
            }
        }
    }

    pub fn count(&self, name: &str) -> usize {
        self.levels
            .iter()
            .find(|(level, _)| level == name)
            .map_or(0, |(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.levels.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Tally "Active" membership rows by level. A member holding the same level
/// on several rows counts once per row.
pub fn member_level_breakdown(contacts: &ContactMap) -> MemberLevelBreakdown {
    let mut res = MemberLevelBreakdown::default();
    let mut index = HashMap::new();

    for contact in contacts {
        for level in contact.member_levels.iter().filter(|m| m.is_active()) {
            res.increment(&mut index, &level.name);
        }
    }

    res
}

/// Active members turning 8 during the reporting cycle, who move up out of
/// the Sprockets class next season.
pub fn sprocket_graduates(contacts: &ContactMap, reporting_year: i32) -> Vec<&Contact> {
    let birth_year = reporting_year + 1 - SPROCKET_GRADUATION_AGE;
    contacts
        .iter()
        .filter(|c| c.active && c.birth_year() == Some(birth_year))
        .collect()
}
