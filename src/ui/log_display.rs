//! Native stand-ins for the DOM: everything the widgets would paint is logged instead.

use std::path::Path;

use crate::data::fetch::is_http_location;
use crate::ui::{PanelDisplay, StatusLine, TofuDisplay};

/// Logs mascot changes. A local asset path that does not exist counts as a failed image load.
#[derive(Debug, Default)]
pub struct LogDisplay {
    current_image: Option<String>,
}

impl LogDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_image(&self) -> Option<&str> {
        self.current_image.as_deref()
    }

    fn image_loads(src: &str) -> bool {
        is_http_location(src) || Path::new(src).exists()
    }
}

impl TofuDisplay for LogDisplay {
    fn show_image(&mut self, src: &str, fallback: &str) {
        let shown = if Self::image_loads(src) {
            src
        } else {
            log::warn!("⚠️  Tofu image {} failed to load, showing {}", src, fallback);
            fallback
        };
        log::info!("🐶 Tofu: {}", shown);
        self.current_image = Some(shown.to_string());
    }

    fn show_status(&mut self, line: &StatusLine) {
        match line.mood_class {
            Some(class) => log::info!(
                "🐶 Status: {} | {} [{}]",
                line.status,
                line.mood_text,
                class.css_class()
            ),
            None => log::info!("🐶 Status: {} | {}", line.status, line.mood_text),
        }
    }

    fn show_fallback(&mut self, image: &str, status: &str) {
        log::warn!("🐶 Tofu fallback: {} ({})", status, image);
        self.current_image = Some(image.to_string());
    }
}

/// Logs streak panel renders.
#[derive(Debug, Default)]
pub struct LogPanel {
    renders: usize,
}

impl LogPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl PanelDisplay for LogPanel {
    fn set_html(&mut self, html: &str) {
        self.renders += 1;
        log::info!("📈 Track panel rendered ({} bytes)", html.len());
        log::debug!("{}", html);
    }
}
