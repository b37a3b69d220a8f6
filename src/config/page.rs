//! Page chrome configuration (header, navigation, reveal animation)

/// Element ids the page binding looks up
pub struct PageElements {
    pub header_id: &'static str,
    pub nav_toggle_id: &'static str,
    pub nav_id: &'static str,
    pub nav_link_selector: &'static str,
    pub anchor_selector: &'static str,
}

/// State classes toggled on the chrome elements
pub struct PageClasses {
    pub nav_toggle_active: &'static str,
    pub nav_open: &'static str,
    pub header_scrolled: &'static str,
}

/// Scroll-into-view reveal animation
pub struct FadeInSettings {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub targets: &'static str,
    pub hidden_transform: &'static str,
    pub shown_transform: &'static str,
    pub transition: &'static str,
}

pub struct PageConfig {
    pub elements: PageElements,
    pub classes: PageClasses,
    /// Header gets its "scrolled" look past this vertical offset (px)
    pub header_scroll_threshold_px: f64,
    pub fade_in: FadeInSettings,
}

pub const PAGE: PageConfig = PageConfig {
    elements: PageElements {
        header_id: "header",
        nav_toggle_id: "nav-toggle",
        nav_id: "nav",
        nav_link_selector: ".nav__link",
        anchor_selector: "a[href^=\"#\"]",
    },
    classes: PageClasses {
        nav_toggle_active: "nav-toggle--active",
        nav_open: "nav--open",
        header_scrolled: "header--scrolled",
    },
    header_scroll_threshold_px: 100.0,
    fade_in: FadeInSettings {
        threshold: 0.1,
        root_margin: "0px 0px -50px 0px",
        targets: ".philosophy__item, .story__content, .timeline__item",
        hidden_transform: "translateY(20px)",
        shown_transform: "translateY(0)",
        transition: "opacity 0.6s ease, transform 0.6s ease",
    },
};
