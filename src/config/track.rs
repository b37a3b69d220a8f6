//! Streak ("Track") widget configuration

/// REST endpoints of the trade-data API
pub struct TrackApi {
    pub base_url: &'static str,
    pub trades_path: &'static str,
    pub current_path: &'static str,
}

/// The Master Track Configuration
pub struct TrackConfig {
    pub api: TrackApi,
    /// Poll cadence (milliseconds)
    pub update_interval_ms: u64,
    /// USD -> HKD conversion used for the live trade card
    pub hkd_rate: f64,
    /// Options contract multiplier
    pub contract_multiplier: f64,
}

pub const TRACK: TrackConfig = TrackConfig {
    api: TrackApi {
        base_url: "https://apeyolo.com",
        trades_path: "/api/defi/trades",
        current_path: "/api/defi/current",
    },
    update_interval_ms: 30_000,
    hkd_rate: 7.8,
    contract_multiplier: 100.0,
};
