/// DOM hooks for the mascot widget
#[derive(Clone, Copy)]
pub struct TofuElements {
    pub image_selector: &'static str,
    pub status_id: &'static str,
    pub mood_id: &'static str,
    /// Classes the status / mood elements are reset to before a mood class is applied
    pub status_base_class: &'static str,
    pub mood_base_class: &'static str,
}

/// DOM hooks for the streak widget
#[derive(Clone, Copy)]
pub struct TrackElements {
    pub container_selector: &'static str,
}

/// Main UI configuration struct that holds all element hooks
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub tofu: TofuElements,
    pub track: TrackElements,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    tofu: TofuElements {
        image_selector: "#window-tofu .tofu-image img",
        status_id: "tofu-status",
        mood_id: "tofu-mood",
        status_base_class: "tofu-status",
        mood_base_class: "tofu-mood",
    },
    track: TrackElements {
        container_selector: "#window-track .window__content",
    },
};
