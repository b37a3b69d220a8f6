use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::config::TOFU;
use crate::domain::TimePeriod;

use super::lenient::{null_as_default, whole_number};

/// A displayable media file and the contexts it suits.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Asset {
    /// Unique key, relative to `ManifestConfig::base_path`
    pub file: String,
    #[serde(default)]
    pub time: BTreeSet<String>,
    #[serde(default)]
    pub mood: BTreeSet<String>,
    #[serde(default)]
    pub events: BTreeSet<String>,
}

impl Asset {
    pub fn suits_period(&self, period: TimePeriod) -> bool {
        self.time.contains(period.as_str())
    }

    pub fn suits_mood(&self, mood: &str) -> bool {
        self.mood.contains(mood)
    }

    pub fn tagged_for_event(&self, event_key: &str) -> bool {
        self.events.contains(event_key)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ManifestConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_path: String,
    /// Anything that is not a whole number reads as unset
    #[serde(default, deserialize_with = "whole_number")]
    pub pool_size: Option<i64>,
    #[serde(default, deserialize_with = "whole_number")]
    pub rotation_interval: Option<i64>,
}

impl ManifestConfig {
    /// Configured pool size, or the default when absent or below one
    pub fn effective_pool_size(&self) -> usize {
        match self.pool_size {
            Some(size) if size >= 1 => size as usize,
            _ => TOFU.rotation.default_pool_size,
        }
    }

    /// Configured rotation interval, or the default when absent or not positive
    pub fn effective_rotation_interval_ms(&self) -> u64 {
        match self.rotation_interval {
            Some(ms) if ms > 0 => ms as u64,
            _ => TOFU.rotation.default_rotation_interval_ms,
        }
    }

    pub fn asset_path(&self, asset: &Asset) -> String {
        format!("{}{}", self.base_path, asset.file)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ManifestDocument {
    #[serde(default)]
    pub config: ManifestConfig,
    #[serde(default)]
    pub gifs: Vec<Asset>,
}
