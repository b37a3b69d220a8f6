//! Context resolution: what time of day it is, what today is, and how the market feels.

use chrono::{Datelike, Timelike};

use crate::config::TOFU;
use crate::domain::{CalendarDocument, Event, TimePeriod};
use crate::ui::StatusLine;
use crate::utils::TimeUtils;

/// Mood used whenever no market mood is available.
pub const NEUTRAL_MOOD: &str = "neutral";

/// Region whose events win over every other region on a shared date.
pub const HOME_REGION: &str = "hk";

/// Everything asset selection and the status text depend on, for one moment.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    pub time: TimePeriod,
    pub mood: String,
    pub event: Option<Event>,
}

impl Context {
    /// Resolve the context for the local wall-clock moment `now`.
    pub fn resolve<T: Datelike + Timelike>(calendar: &CalendarDocument, now: &T) -> Self {
        let event = resolve_today_event(calendar, now).cloned();
        let mood = resolve_market_mood().unwrap_or_else(|| NEUTRAL_MOOD.to_string());
        let time = resolve_time_period(now);

        Self { time, mood, event }
    }

    /// The market mood, if one is actually in play
    pub fn active_mood(&self) -> Option<&str> {
        (self.mood != NEUTRAL_MOOD).then_some(self.mood.as_str())
    }

    /// Normalised key of today's event, as used in manifest event tags
    pub fn event_key(&self) -> Option<String> {
        self.event.as_ref().map(|event| event_key(&event.name))
    }

    /// Status and mood text for this context. An event beats the time-of-day defaults.
    pub fn status_line(&self, calendar: &CalendarDocument) -> StatusLine {
        if let Some(event) = &self.event {
            return StatusLine::new(
                event.status.clone(),
                format!("{} {}", event.name.to_uppercase(), event.emoji),
            );
        }

        match calendar.default_for(self.time) {
            Some(defaults) => StatusLine::new(
                defaults.status.clone(),
                format!("{} {}", defaults.mood, defaults.emoji),
            ),
            None => {
                log::warn!("Calendar has no defaults for {}", self.time);
                StatusLine::new(TOFU.fallback.status, "")
            }
        }
    }
}

/// Split the local clock into four bands: [6,12) morning, [12,18) afternoon,
/// [18,22) evening, everything else night.
pub fn resolve_time_period<T: Timelike>(now: &T) -> TimePeriod {
    match now.hour() {
        6..=11 => TimePeriod::Morning,
        12..=17 => TimePeriod::Afternoon,
        18..=21 => TimePeriod::Evening,
        _ => TimePeriod::Night,
    }
}

/// The event that governs `today`, if any.
///
/// Fixed events match on `MM-DD`, lunar events on the full `YYYY-MM-DD`.
/// With several matches, home-region events come first, then the lowest
/// `priority`; equal keys keep document order.
pub fn resolve_today_event<'a, D: Datelike>(
    calendar: &'a CalendarDocument,
    today: &D,
) -> Option<&'a Event> {
    let (fixed_key, full_key) = TimeUtils::date_keys(today);

    calendar
        .events
        .iter()
        .filter(|event| event.falls_on(&fixed_key, &full_key))
        .min_by(|a, b| {
            (!a.is_region(HOME_REGION))
                .cmp(&!b.is_region(HOME_REGION))
                .then(a.priority.total_cmp(&b.priority))
        })
}

/// Market mood hook. Always `None` for now, so time of day decides.
// TODO: derive a mood from SPX/VIX once a quote feed is wired in (US session only).
pub fn resolve_market_mood() -> Option<String> {
    None
}

/// Lowercase the event name and replace everything outside `a-z` with `-`.
/// One `-` per UTF-16 unit, so astral characters (emoji) produce two.
pub fn event_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() {
            key.push(c);
        } else {
            for _ in 0..c.len_utf16() {
                key.push('-');
            }
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DefaultDisplay, EventType};
    use crate::ui::MoodClass;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use strum::IntoEnumIterator;

    fn at(date: (i32, u32, u32), hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn event(name: &str, event_type: EventType, date: &str, region: Option<&str>, priority: f64) -> Event {
        Event {
            name: name.to_string(),
            event_type,
            date: date.to_string(),
            region: region.map(str::to_string),
            priority,
            status: "CELEBRATING".to_string(),
            emoji: "🎉".to_string(),
        }
    }

    #[test]
    fn time_bands_partition_the_day() {
        let mut counts = std::collections::HashMap::new();
        for hour in 0..24 {
            for minute in [0, 59] {
                let t = NaiveTime::from_hms_opt(hour, minute, 59).unwrap();
                *counts.entry(resolve_time_period(&t)).or_insert(0) += 1;
            }
        }
        // Every band is hit, and only the four bands exist
        assert_eq!(counts.len(), TimePeriod::iter().count());
        assert_eq!(counts[&TimePeriod::Morning], 6 * 2);
        assert_eq!(counts[&TimePeriod::Afternoon], 6 * 2);
        assert_eq!(counts[&TimePeriod::Evening], 4 * 2);
        assert_eq!(counts[&TimePeriod::Night], 8 * 2);
    }

    #[test]
    fn band_edges() {
        let hour = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
        assert_eq!(resolve_time_period(&hour(5)), TimePeriod::Night);
        assert_eq!(resolve_time_period(&hour(6)), TimePeriod::Morning);
        assert_eq!(resolve_time_period(&hour(11)), TimePeriod::Morning);
        assert_eq!(resolve_time_period(&hour(12)), TimePeriod::Afternoon);
        assert_eq!(resolve_time_period(&hour(18)), TimePeriod::Evening);
        assert_eq!(resolve_time_period(&hour(21)), TimePeriod::Evening);
        assert_eq!(resolve_time_period(&hour(22)), TimePeriod::Night);
        assert_eq!(resolve_time_period(&hour(0)), TimePeriod::Night);
    }

    #[test]
    fn fixed_event_matches_any_year() {
        let calendar = CalendarDocument {
            events: vec![event("Lunar New Year", EventType::Fixed, "02-10", Some("hk"), 1.0)],
            ..Default::default()
        };
        for year in [2024, 2025, 2031] {
            let found = resolve_today_event(&calendar, &at((year, 2, 10), 9));
            assert_eq!(found.map(|e| e.name.as_str()), Some("Lunar New Year"));
        }
        assert!(resolve_today_event(&calendar, &at((2025, 2, 11), 9)).is_none());
    }

    #[test]
    fn lunar_event_matches_only_its_year() {
        let calendar = CalendarDocument {
            events: vec![event("Mid-Autumn", EventType::Lunar, "2025-10-06", Some("hk"), 1.0)],
            ..Default::default()
        };
        assert!(resolve_today_event(&calendar, &at((2025, 10, 6), 9)).is_some());
        assert!(resolve_today_event(&calendar, &at((2026, 10, 6), 9)).is_none());
    }

    #[test]
    fn home_region_beats_priority() {
        let calendar = CalendarDocument {
            events: vec![
                event("Thanksgiving", EventType::Fixed, "11-27", Some("us"), 0.0),
                event("Local Holiday", EventType::Fixed, "11-27", Some("hk"), 9.0),
                event("Everywhere Day", EventType::Fixed, "11-27", None, -5.0),
            ],
            ..Default::default()
        };
        let found = resolve_today_event(&calendar, &at((2025, 11, 27), 9)).unwrap();
        assert_eq!(found.name, "Local Holiday");
    }

    #[test]
    fn lower_priority_wins_then_document_order() {
        let calendar = CalendarDocument {
            events: vec![
                event("Second", EventType::Fixed, "05-01", Some("us"), 3.0),
                event("First", EventType::Fixed, "05-01", Some("uk"), 1.0),
                event("Tied", EventType::Fixed, "05-01", None, 1.0),
            ],
            ..Default::default()
        };
        let today = at((2025, 5, 1), 9);
        for _ in 0..10 {
            let found = resolve_today_event(&calendar, &today).unwrap();
            assert_eq!(found.name, "First");
        }
    }

    #[test]
    fn market_mood_is_not_wired_yet() {
        assert_eq!(resolve_market_mood(), None);
        let context = Context::resolve(&CalendarDocument::default(), &at((2025, 1, 2), 13));
        assert_eq!(context.mood, NEUTRAL_MOOD);
        assert_eq!(context.active_mood(), None);
        assert_eq!(context.time, TimePeriod::Afternoon);
        assert!(context.event.is_none());
    }

    #[test]
    fn event_key_normalisation() {
        assert_eq!(event_key("Lunar New Year"), "lunar-new-year");
        assert_eq!(event_key("Mid-Autumn Festival"), "mid-autumn-festival");
        assert_eq!(event_key("New Year's Eve"), "new-year-s-eve");
        assert_eq!(event_key("4th of July"), "-th-of-july");
        assert_eq!(event_key("Party 🎉"), "party---");
    }

    #[test]
    fn event_text_beats_defaults() {
        let mut calendar = CalendarDocument::default();
        calendar.defaults.insert(
            "morning".into(),
            DefaultDisplay {
                status: "SLEEPY".into(),
                mood: "Stretching".into(),
                emoji: "🥱".into(),
            },
        );

        let mut context = Context {
            time: TimePeriod::Morning,
            mood: NEUTRAL_MOOD.into(),
            event: None,
        };
        let line = context.status_line(&calendar);
        assert_eq!(line.status, "SLEEPY");
        assert_eq!(line.mood_text, "Stretching 🥱");
        assert_eq!(line.mood_class, Some(MoodClass::Sleepy));

        context.event = Some(event("Halloween", EventType::Fixed, "10-31", None, 1.0));
        let line = context.status_line(&calendar);
        assert_eq!(line.status, "CELEBRATING");
        assert_eq!(line.mood_text, "HALLOWEEN 🎉");
        assert_eq!(line.mood_class, Some(MoodClass::Party));
    }

    #[test]
    fn missing_defaults_fall_back_to_placeholder() {
        let context = Context {
            time: TimePeriod::Evening,
            mood: NEUTRAL_MOOD.into(),
            event: None,
        };
        let line = context.status_line(&CalendarDocument::default());
        assert_eq!(line.status, "GOOD BOY");
        assert_eq!(line.mood_text, "");
    }
}
