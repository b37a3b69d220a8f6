//! Mascot ("Tofu") widget configuration

use crate::utils::TimeUtils;

/// Where the widget finds its two documents
pub struct TofuDataPaths {
    pub calendar: &'static str,
    pub manifest: &'static str,
}

/// What the widget shows when something goes wrong
pub struct TofuFallback {
    /// Shown when a single asset fails to load, and when the documents fail to load
    pub image: &'static str,
    /// Status text used when the documents fail to load
    pub status: &'static str,
}

/// Rotation and anti-repeat tuning
pub struct RotationSettings {
    /// Used when the manifest has no (or an invalid) `poolSize`
    pub default_pool_size: usize,
    /// Used when the manifest has no `rotationInterval`
    pub default_rotation_interval_ms: u64,
    /// Full pool rebuild cadence (context may have moved on)
    pub pool_refresh_interval_ms: u64,
    /// Cadence of the midnight refresh once the first midnight has passed
    pub midnight_repeat_ms: u64,
    /// Shown-history is forgotten once it covers more than this share of the manifest
    pub shown_reset_ratio: f64,
}

/// The Master Tofu Configuration
pub struct TofuConfig {
    pub data: TofuDataPaths,
    pub fallback: TofuFallback,
    pub rotation: RotationSettings,
}

pub const TOFU: TofuConfig = TofuConfig {
    data: TofuDataPaths {
        calendar: "data/tofu-calendar.json",
        manifest: "data/tofu-manifest.json",
    },

    fallback: TofuFallback {
        image: "images/tofu/default.gif",
        status: "GOOD BOY",
    },

    rotation: RotationSettings {
        default_pool_size: 5,
        default_rotation_interval_ms: 30 * TimeUtils::MS_IN_S as u64,
        pool_refresh_interval_ms: TimeUtils::MS_IN_5_MIN as u64,
        midnight_repeat_ms: TimeUtils::MS_IN_D as u64,
        shown_reset_ratio: 0.7,
    },
};
