//! Display layer. The widgets only ever talk to these traits.

pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(not(target_arch = "wasm32"))]
pub mod log_display;
pub mod styles;

pub use config::UI_CONFIG;
#[cfg(target_arch = "wasm32")]
pub use dom::{DomDisplay, DomPanel};
#[cfg(not(target_arch = "wasm32"))]
pub use log_display::{LogDisplay, LogPanel};
pub use styles::MoodClass;

/// The text shown under the mascot, plus the style that goes with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub status: String,
    pub mood_text: String,
    pub mood_class: Option<MoodClass>,
}

impl StatusLine {
    pub fn new(status: impl Into<String>, mood_text: impl Into<String>) -> Self {
        let status = status.into();
        let mood_class = MoodClass::for_status(&status);
        Self {
            status,
            mood_text: mood_text.into(),
            mood_class,
        }
    }
}

/// Where the mascot widget paints.
pub trait TofuDisplay {
    /// Show the image at `src`. If it fails to load, show `fallback` instead (once, no retry).
    fn show_image(&mut self, src: &str, fallback: &str);

    /// Replace the status and mood lines. Previous mood styling is cleared first.
    fn show_status(&mut self, line: &StatusLine);

    /// Static display for when the widget could not start at all.
    fn show_fallback(&mut self, image: &str, status: &str);
}

/// Where the streak widget paints.
pub trait PanelDisplay {
    fn set_html(&mut self, html: &str);
}
