//! The streak ("Track") panel: polls the trade API and paints the current winning run.

pub mod format;
pub mod render;
pub mod streak;
pub mod widget;

pub use format::{format_date, format_locale, format_number, format_short_date};
pub use render::render;
pub use streak::{ExitStatus, calculate_streak, contracts_breakdown, format_exit_status};
pub use widget::TrackWidget;
