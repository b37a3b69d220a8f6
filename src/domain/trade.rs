//! Shapes returned by the trade-data API.

use serde::{Deserialize, Serialize};

use super::lenient::{flexible_f64, flexible_f64_or_zero, null_as_default};

/// A closed (or closing) historical trade.
///
/// Every field tolerates `null` and numbers may arrive as text, so one odd row never costs the whole history.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Trade {
    /// `YYYY-MM-DD`
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    pub outcome: Option<String>,
    pub status: Option<String>,
    pub exit_reason: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub strategy: String,
    #[serde(deserialize_with = "null_as_default")]
    pub entry_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub exit_time: String,
    #[serde(deserialize_with = "flexible_f64_or_zero")]
    pub contracts: f64,
    #[serde(deserialize_with = "flexible_f64")]
    pub put_strike: Option<f64>,
    #[serde(deserialize_with = "flexible_f64")]
    pub call_strike: Option<f64>,
    #[serde(deserialize_with = "flexible_f64")]
    pub premium_received: Option<f64>,
    #[serde(deserialize_with = "flexible_f64")]
    pub entry_premium: Option<f64>,
    #[serde(rename = "totalNotionalHKD", deserialize_with = "flexible_f64")]
    pub total_notional_hkd: Option<f64>,
    #[serde(deserialize_with = "flexible_f64")]
    pub leg1_premium: Option<f64>,
    #[serde(deserialize_with = "flexible_f64")]
    pub leg2_premium: Option<f64>,
    #[serde(deserialize_with = "flexible_f64")]
    pub stop_loss_multiplier: Option<f64>,
    #[serde(deserialize_with = "flexible_f64")]
    pub cost_to_close: Option<f64>,
}

impl Trade {
    pub fn is_open(&self) -> bool {
        self.outcome.as_deref() == Some("open") || self.status.as_deref() == Some("open")
    }

    pub fn is_win(&self) -> bool {
        self.outcome.as_deref() == Some("win")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TradesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub trades: Vec<Trade>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LegType {
    Put,
    Call,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Leg {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub leg_type: LegType,
    #[serde(deserialize_with = "flexible_f64_or_zero")]
    pub strike: f64,
    #[serde(rename = "premiumUSD", deserialize_with = "flexible_f64_or_zero")]
    pub premium_usd: f64,
    #[serde(deserialize_with = "flexible_f64_or_zero")]
    pub contracts: f64,
}

/// The trade currently on the book, if any.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OpenTrade {
    #[serde(deserialize_with = "null_as_default")]
    pub is_open: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub strategy: String,
    #[serde(deserialize_with = "null_as_default")]
    pub entry_time: String,
    #[serde(deserialize_with = "flexible_f64_or_zero")]
    pub contracts: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub legs: Vec<Leg>,
    #[serde(deserialize_with = "flexible_f64")]
    pub stop_loss_multiplier: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub has_trade: bool,
    pub trade: Option<OpenTrade>,
    #[serde(deserialize_with = "null_as_default")]
    pub today_str: String,
    pub time_until_close: Option<String>,
}

impl CurrentSnapshot {
    /// The live trade, but only while it is genuinely still open.
    pub fn live_trade(&self) -> Option<&OpenTrade> {
        if !self.has_trade {
            return None;
        }
        self.trade
            .as_ref()
            .filter(|t| t.is_open && t.status == "open")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trade_with_mixed_numeric_fields() {
        let json = r#"{
            "date": "2025-03-04", "outcome": "win", "status": "expired",
            "symbol": "SPY", "strategy": "Strangle", "contracts": 4,
            "putStrike": 560, "callStrike": 590, "premiumReceived": 120.5,
            "entryPremium": 940, "totalNotionalHKD": 3588000,
            "stopLossMultiplier": "2.5", "entryTime": "10:05", "exitTime": "16:00"
        }"#;
        let trade: Trade = serde_json::from_str(json).unwrap();
        assert!(trade.is_win());
        assert!(!trade.is_open());
        assert_eq!(trade.stop_loss_multiplier, Some(2.5));
        assert_eq!(trade.total_notional_hkd, Some(3_588_000.0));
        assert_eq!(trade.leg1_premium, None);
    }

    #[test]
    fn live_trade_requires_open_status() {
        let json = r#"{
            "hasTrade": true, "todayStr": "2025-03-05", "timeUntilClose": "2h 10m",
            "trade": {"isOpen": true, "status": "open", "contracts": 2,
                      "legs": [{"type": "PUT", "strike": 550, "premiumUSD": 60, "contracts": 2}],
                      "stopLossMultiplier": 3}
        }"#;
        let mut snapshot: CurrentSnapshot = serde_json::from_str(json).unwrap();
        let live = snapshot.live_trade().unwrap();
        assert_eq!(live.legs[0].leg_type, LegType::Put);
        assert_eq!(live.stop_loss_multiplier, Some(3.0));

        if let Some(trade) = snapshot.trade.as_mut() {
            trade.status = "expired".into();
        }
        assert!(snapshot.live_trade().is_none());
    }

    #[test]
    fn null_fields_keep_the_row() {
        let json = r#"{"trades": [
            {"date": "2025-03-05", "outcome": "win", "symbol": null, "strategy": null,
             "entryTime": null, "exitTime": null, "contracts": null, "putStrike": "560",
             "premiumReceived": null, "totalNotionalHKD": "n/a"}
        ]}"#;
        let response: TradesResponse = serde_json::from_str(json).unwrap();
        let trade = &response.trades[0];
        assert!(trade.is_win());
        assert_eq!(trade.exit_time, "");
        assert_eq!(trade.contracts, 0.0);
        assert_eq!(trade.put_strike, Some(560.0));
        assert_eq!(trade.total_notional_hkd, None);

        let snapshot: CurrentSnapshot = serde_json::from_str(
            r#"{"hasTrade": null, "todayStr": null,
                "trade": {"isOpen": null, "status": null, "legs": [{"type": null, "strike": null}]}}"#,
        )
        .unwrap();
        assert!(!snapshot.has_trade);
        let trade = snapshot.trade.unwrap();
        assert!(!trade.is_open);
        assert_eq!(trade.legs[0].leg_type, LegType::Other);
    }
}
