// Domain types and value objects
pub mod calendar;
mod lenient;
pub mod manifest;
pub mod trade;

// Re-export commonly used types
pub use calendar::{CalendarDocument, DefaultDisplay, Event, EventType, TimePeriod};
pub use manifest::{Asset, ManifestConfig, ManifestDocument};
pub use trade::{CurrentSnapshot, Leg, LegType, OpenTrade, Trade, TradesResponse};
