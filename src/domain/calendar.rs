use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::lenient::{flexible_f64_or_zero, null_as_default};

/// The four bands the day is split into.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TimePeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimePeriod {
    /// The tag used in the manifest and calendar documents
    pub fn as_str(&self) -> &'static str {
        match self {
            TimePeriod::Morning => "morning",
            TimePeriod::Afternoon => "afternoon",
            TimePeriod::Evening => "evening",
            TimePeriod::Night => "night",
        }
    }
}

/// How an event's `date` field is keyed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Same day every year, keyed `MM-DD`
    Fixed,
    /// Moves every year (lunar holidays), keyed `YYYY-MM-DD`
    Lunar,
    /// Anything else in the document. Never matches a day.
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub date: String,
    #[serde(default)]
    pub region: Option<String>,
    /// Lower number wins. Missing or unreadable reads as 0.
    #[serde(default, deserialize_with = "flexible_f64_or_zero")]
    pub priority: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub emoji: String,
}

impl Event {
    pub fn is_region(&self, region: &str) -> bool {
        self.region.as_deref() == Some(region)
    }

    /// Does this event fall on the day described by the two keys?
    pub fn falls_on(&self, fixed_key: &str, full_key: &str) -> bool {
        match self.event_type {
            EventType::Fixed => self.date == fixed_key,
            EventType::Lunar => self.date == full_key,
            EventType::Unknown => false,
        }
    }
}

/// Status / mood / emoji shown for a time period when no event is on.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DefaultDisplay {
    pub status: String,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub emoji: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CalendarDocument {
    #[serde(default)]
    pub events: Vec<Event>,
    /// Keyed by period tag (`"morning"`, ...)
    #[serde(default)]
    pub defaults: BTreeMap<String, DefaultDisplay>,
}

impl CalendarDocument {
    pub fn default_for(&self, period: TimePeriod) -> Option<&DefaultDisplay> {
        self.defaults.get(period.as_str())
    }
}
