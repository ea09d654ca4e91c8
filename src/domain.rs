//! Domain records owned by a session

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type NgoId = u32;
pub type EventId = u32;

/// Fixed service areas an event or NGO can be located in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    Downtown,
    Westside,
    Eastside,
    Northside,
    Southside,
}

impl Area {
    pub const ALL: [Area; 5] = [
        Area::Downtown,
        Area::Westside,
        Area::Eastside,
        Area::Northside,
        Area::Southside,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Area::Downtown => "Downtown",
            Area::Westside => "Westside",
            Area::Eastside => "Eastside",
            Area::Northside => "Northside",
            Area::Southside => "Southside",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// NGO directory entry. Seeded once per session and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ngo {
    pub id: NgoId,
    pub name: String,
    pub location: Area,
    pub contact: String,
}

impl Ngo {
    fn new(id: NgoId, name: &str, location: Area, contact: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            location,
            contact: contact.to_string(),
        }
    }

    /// The directory every new session starts with
    pub fn seed_directory() -> Vec<Ngo> {
        vec![
            Ngo::new(1, "Feed the Need", Area::Downtown, "contact@feedtheneed.org"),
            Ngo::new(2, "Food for All", Area::Westside, "info@foodforall.org"),
            Ngo::new(3, "Community Plate", Area::Eastside, "help@communityplate.org"),
        ]
    }
}

/// Event lifecycle status. Only `Listed` is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Listed,
}

impl EventStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Listed => "Listed",
        }
    }
}

/// A listed event expected to produce surplus food
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub date: NaiveDate,
    pub location: Area,
    pub guests: u32,
    pub surplus: u32,
    pub transport_help: bool,
    pub info: String,
    pub status: EventStatus,
    /// Append-only; the same NGO may appear more than once
    pub interested_ngos: Vec<NgoId>,
}

impl Event {
    /// Heading used when listing events, e.g. `Wedding Gala - October 26, 2026`
    pub fn display_title(&self) -> String {
        format!("{} - {}", self.name, self.date.format("%B %d, %Y"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
