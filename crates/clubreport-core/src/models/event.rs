use serde::{Deserialize, Serialize};

use crate::dates;

// Response from GET /org/{org}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubEventsResponse {
    #[serde(default)]
    pub events: Vec<SqorzEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqorzEvent {
    #[serde(rename = "eventName")]
    pub event_name: String,
    #[serde(rename = "eventDate")]
    pub event_date: String,
    #[serde(default)]
    pub entered: u32,
    #[serde(default)]
    pub registered: u32,
    #[serde(rename = "peopleCount", default)]
    pub people_count: PeopleCount,
    #[serde(rename = "completeRaces", default)]
    pub complete_races: u32,
    #[serde(rename = "enabledClasses", default)]
    pub enabled_classes: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeopleCount {
    #[serde(default)]
    pub entered: u32,
    #[serde(default)]
    pub registered: u32,
}

impl SqorzEvent {
    pub fn year(&self) -> Option<i32> {
        dates::year_of(&self.event_date)
    }

    pub fn to_club_event(&self) -> ClubEvent {
        ClubEvent {
            name: self.event_name.clone(),
            date: self.event_date.clone(),
            entries: self.entered,
            registered: self.registered,
            people: self.people_count.entered,
            people_registered: self.people_count.registered,
            classes_count: self.enabled_classes,
            complete_races: self.complete_races,
        }
    }
}

/// Summary of one club-run race meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubEvent {
    pub name: String,
    pub date: String,
    pub entries: u32,
    pub registered: u32,
    pub people: u32,
    pub people_registered: u32,
    pub classes_count: u32,
    pub complete_races: u32,
}
