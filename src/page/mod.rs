//! Site chrome around the widgets: mobile navigation, header scroll state,
//! in-page anchors and the reveal-on-scroll animation.
//!
//! The decisions live here as plain functions; `dom` only wires them to the page.

#[cfg(target_arch = "wasm32")]
pub mod dom;

use crate::config::PAGE;

/// Mobile navigation drawer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A nav link was followed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Returns true when the key closed an open menu.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.open = false;
            true
        } else {
            false
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// Page scrolling is locked while the drawer is open.
    pub fn body_overflow(&self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }
}

pub fn header_is_scrolled(offset_px: f64) -> bool {
    offset_px > PAGE.header_scroll_threshold_px
}

/// Selector to scroll to for an in-page link, if it names one.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href {
        "#" => None,
        h if h.starts_with('#') => Some(h),
        _ => None,
    }
}

/// Inline style applied to a reveal target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
    pub transition: Option<&'static str>,
}

impl RevealStyle {
    pub fn hidden() -> Self {
        Self {
            opacity: "0",
            transform: PAGE.fade_in.hidden_transform,
            transition: Some(PAGE.fade_in.transition),
        }
    }

    pub fn shown() -> Self {
        Self {
            opacity: "1",
            transform: PAGE.fade_in.shown_transform,
            transition: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        let mut nav = NavMenu::default();
        assert_eq!(nav.aria_expanded(), "false");
        assert_eq!(nav.body_overflow(), "");

        nav.toggle();
        assert!(nav.is_open());
        assert_eq!(nav.aria_expanded(), "true");
        assert_eq!(nav.body_overflow(), "hidden");

        nav.toggle();
        assert!(!nav.is_open());
    }

    #[test]
    fn link_click_and_escape_close() {
        let mut nav = NavMenu::default();
        nav.toggle();
        nav.close();
        assert!(!nav.is_open());

        assert!(!nav.handle_key("Escape"));
        nav.toggle();
        assert!(!nav.handle_key("Enter"));
        assert!(nav.is_open());
        assert!(nav.handle_key("Escape"));
        assert!(!nav.is_open());
    }

    #[test]
    fn header_threshold_is_exclusive() {
        assert!(!header_is_scrolled(0.0));
        assert!(!header_is_scrolled(100.0));
        assert!(header_is_scrolled(100.5));
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("#story"), Some("#story"));
        assert_eq!(anchor_target("/about"), None);
        assert_eq!(anchor_target(""), None);
    }

    #[test]
    fn reveal_styles() {
        let hidden = RevealStyle::hidden();
        assert_eq!(hidden.opacity, "0");
        assert_eq!(hidden.transform, "translateY(20px)");
        assert_eq!(hidden.transition, Some("opacity 0.6s ease, transform 0.6s ease"));

        let shown = RevealStyle::shown();
        assert_eq!(shown.opacity, "1");
        assert_eq!(shown.transform, "translateY(0)");
    }
}
