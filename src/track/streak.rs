//! Winning-streak arithmetic over the trade history.

use chrono::NaiveDate;
use strum_macros::Display;

use crate::domain::{LegType, OpenTrade, Trade};
use crate::utils::TimeUtils;

use super::format::js_number;

/// Most recent run of consecutive wins among closed trades, oldest first.
pub fn calculate_streak(trades: &[Trade]) -> Vec<&Trade> {
    let date_of =
        |t: &Trade| NaiveDate::parse_from_str(&t.date, TimeUtils::STANDARD_TIME_FORMAT).ok();

    let mut closed: Vec<&Trade> = trades.iter().filter(|t| !t.is_open()).collect();
    // Newest first. Undated trades sink to the end.
    closed.sort_by(|a, b| date_of(b).cmp(&date_of(a)));

    let mut streak: Vec<&Trade> = closed.into_iter().take_while(|t| t.is_win()).collect();
    streak.reverse();
    streak
}

/// Running totals for the streak header.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StreakTotals {
    pub usd: f64,
    pub hkd: f64,
    pub notional_hkd: f64,
}

impl StreakTotals {
    pub fn sum(streak: &[&Trade]) -> Self {
        streak.iter().fold(Self::default(), |acc, t| Self {
            usd: acc.usd + t.premium_received.unwrap_or(0.0),
            hkd: acc.hkd + t.entry_premium.unwrap_or(0.0),
            notional_hkd: acc.notional_hkd + t.total_notional_hkd.unwrap_or(0.0),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ExitStatus {
    Expired,
    Stopped,
    Exercised,
    Closed,
}

pub fn format_exit_status(trade: &Trade) -> ExitStatus {
    let status = trade.status.as_deref().unwrap_or_default().to_lowercase();
    let reason = trade.exit_reason.as_deref().unwrap_or_default().to_lowercase();

    if status == "expired" || reason.contains("expired") {
        ExitStatus::Expired
    } else if status == "stopped out" || reason.contains("stop") || reason.contains("auto-closed")
    {
        ExitStatus::Stopped
    } else if reason.contains("exercised") || reason.contains("assigned") {
        ExitStatus::Exercised
    } else {
        ExitStatus::Closed
    }
}

/// `4` contracts on a strangle reads `2P / 2C`.
pub fn contracts_breakdown(contracts: f64, has_put: bool, has_call: bool) -> String {
    match (has_put, has_call) {
        (true, true) => {
            let per_leg = js_number(contracts / 2.0);
            format!("{per_leg}P / {per_leg}C")
        }
        (true, false) => format!("{}P", js_number(contracts)),
        (false, true) => format!("{}C", js_number(contracts)),
        (false, false) => js_number(contracts),
    }
}

/// Zero and missing strikes are both left out: `560P / 590C`, `560P`, ``.
pub fn strikes_label(put: Option<f64>, call: Option<f64>) -> String {
    let put = put.filter(|s| *s != 0.0);
    let call = call.filter(|s| *s != 0.0);
    let mut label = String::new();
    if let Some(p) = put {
        label.push_str(&format!("{}P", js_number(p)));
    }
    if put.is_some() && call.is_some() {
        label.push_str(" / ");
    }
    if let Some(c) = call {
        label.push_str(&format!("{}C", js_number(c)));
    }
    label
}

/// `Put @1.200 · Call @0.950`, either side omitted when absent.
pub fn leg_premiums_label(put: Option<f64>, call: Option<f64>) -> String {
    let put = put.filter(|p| *p != 0.0 && p.is_finite());
    let call = call.filter(|c| *c != 0.0 && c.is_finite());
    match (put, call) {
        (Some(p), Some(c)) => format!("Put @{p:.3} · Call @{c:.3}"),
        (Some(p), None) => format!("Put @{p:.3}"),
        (None, Some(c)) => format!("Call @{c:.3}"),
        (None, None) => String::new(),
    }
}

/// Figures for the live-trade card, derived from the trade's legs.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveFigures {
    pub premium_sold_usd: f64,
    pub premium_sold_hkd: f64,
    pub put_strike: Option<f64>,
    pub call_strike: Option<f64>,
    /// Premium per contract unit.
    pub put_premium: Option<f64>,
    pub call_premium: Option<f64>,
    pub notional_hkd: f64,
    pub contracts_text: String,
}

impl LiveFigures {
    pub fn from_trade(trade: &OpenTrade, hkd_rate: f64, multiplier: f64) -> Self {
        let mut premium_sold_usd = 0.0;
        let (mut put_strike, mut call_strike) = (None, None);
        let (mut put_premium, mut call_premium) = (None, None);

        let per_unit = |leg_premium: f64, contracts: f64| {
            let units = contracts * multiplier;
            (units != 0.0).then(|| leg_premium / units)
        };

        for leg in &trade.legs {
            premium_sold_usd += leg.premium_usd;
            match leg.leg_type {
                LegType::Put => {
                    put_strike = Some(leg.strike);
                    put_premium = per_unit(leg.premium_usd, leg.contracts);
                }
                LegType::Call => {
                    call_strike = Some(leg.strike);
                    call_premium = per_unit(leg.premium_usd, leg.contracts);
                }
                LegType::Other => {}
            }
        }

        let has_put = put_strike.is_some_and(|s| s != 0.0);
        let has_call = call_strike.is_some_and(|s| s != 0.0);
        let legs_held = if has_put && has_call { 2.0 } else { 1.0 };
        let notional_hkd = (put_strike.unwrap_or(0.0) + call_strike.unwrap_or(0.0))
            * (trade.contracts / legs_held)
            * multiplier
            * hkd_rate;

        Self {
            premium_sold_usd,
            premium_sold_hkd: premium_sold_usd * hkd_rate,
            put_strike,
            call_strike,
            put_premium,
            call_premium,
            notional_hkd,
            contracts_text: contracts_breakdown(trade.contracts, has_put, has_call),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Leg;

    fn trade(date: &str, outcome: &str) -> Trade {
        Trade {
            date: date.to_string(),
            outcome: Some(outcome.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn streak_stops_at_first_loss() {
        let trades = vec![
            trade("2025-03-03", "win"),
            trade("2025-03-05", "win"),
            trade("2025-03-04", "loss"),
            trade("2025-03-06", "win"),
            trade("2025-03-07", "open"),
        ];
        let streak = calculate_streak(&trades);
        let dates: Vec<&str> = streak.iter().map(|t| t.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-03-05", "2025-03-06"]);
    }

    #[test]
    fn streak_skips_open_status() {
        let mut live = trade("2025-03-08", "win");
        live.status = Some("open".to_string());
        let trades = vec![trade("2025-03-07", "win"), live];
        assert_eq!(calculate_streak(&trades).len(), 1);
    }

    #[test]
    fn no_streak_when_latest_lost() {
        let trades = vec![trade("2025-03-05", "win"), trade("2025-03-06", "loss")];
        assert!(calculate_streak(&trades).is_empty());
        assert!(calculate_streak(&[]).is_empty());
    }

    #[test]
    fn totals_treat_missing_as_zero() {
        let mut a = trade("2025-03-05", "win");
        a.premium_received = Some(100.0);
        a.entry_premium = Some(780.0);
        a.total_notional_hkd = Some(1_000_000.0);
        let b = trade("2025-03-06", "win");
        let totals = StreakTotals::sum(&[&a, &b]);
        assert_eq!(totals.usd, 100.0);
        assert_eq!(totals.hkd, 780.0);
        assert_eq!(totals.notional_hkd, 1_000_000.0);
    }

    #[test]
    fn exit_status_precedence() {
        let with = |status: Option<&str>, reason: Option<&str>| Trade {
            status: status.map(str::to_string),
            exit_reason: reason.map(str::to_string),
            ..Default::default()
        };
        assert_eq!(format_exit_status(&with(Some("Expired"), None)), ExitStatus::Expired);
        assert_eq!(
            format_exit_status(&with(Some("closed"), Some("Stop loss hit"))),
            ExitStatus::Stopped
        );
        assert_eq!(
            format_exit_status(&with(None, Some("Auto-closed at 15:55"))),
            ExitStatus::Stopped
        );
        assert_eq!(
            format_exit_status(&with(Some("stopped out"), Some("expired worthless"))),
            ExitStatus::Expired
        );
        assert_eq!(format_exit_status(&with(None, Some("Assigned"))), ExitStatus::Exercised);
        assert_eq!(format_exit_status(&with(None, None)), ExitStatus::Closed);
        assert_eq!(ExitStatus::Stopped.to_string(), "Stopped");
    }

    #[test]
    fn contract_breakdowns() {
        assert_eq!(contracts_breakdown(4.0, true, true), "2P / 2C");
        assert_eq!(contracts_breakdown(3.0, true, true), "1.5P / 1.5C");
        assert_eq!(contracts_breakdown(2.0, true, false), "2P");
        assert_eq!(contracts_breakdown(2.0, false, true), "2C");
        assert_eq!(contracts_breakdown(2.0, false, false), "2");
    }

    #[test]
    fn strike_labels() {
        assert_eq!(strikes_label(Some(560.0), Some(590.0)), "560P / 590C");
        assert_eq!(strikes_label(Some(560.0), None), "560P");
        assert_eq!(strikes_label(Some(0.0), Some(590.0)), "590C");
        assert_eq!(strikes_label(None, None), "");
        assert_eq!(leg_premiums_label(Some(1.2), Some(0.95)), "Put @1.200 · Call @0.950");
        assert_eq!(leg_premiums_label(None, Some(0.5)), "Call @0.500");
    }

    #[test]
    fn live_figures_from_strangle() {
        let open = OpenTrade {
            is_open: true,
            status: "open".to_string(),
            contracts: 4.0,
            legs: vec![
                Leg { leg_type: LegType::Put, strike: 560.0, premium_usd: 240.0, contracts: 2.0 },
                Leg { leg_type: LegType::Call, strike: 590.0, premium_usd: 190.0, contracts: 2.0 },
            ],
            ..Default::default()
        };
        let figures = LiveFigures::from_trade(&open, 7.8, 100.0);
        assert_eq!(figures.premium_sold_usd, 430.0);
        assert!((figures.premium_sold_hkd - 3354.0).abs() < 1e-9);
        assert_eq!(figures.put_premium, Some(1.2));
        assert_eq!(figures.call_premium, Some(0.95));
        assert!((figures.notional_hkd - 1150.0 * 2.0 * 100.0 * 7.8).abs() < 1e-6);
        assert_eq!(figures.contracts_text, "2P / 2C");
    }

    #[test]
    fn live_figures_guard_zero_contract_legs() {
        let open = OpenTrade {
            contracts: 1.0,
            legs: vec![Leg { leg_type: LegType::Put, strike: 560.0, premium_usd: 50.0, contracts: 0.0 }],
            ..Default::default()
        };
        let figures = LiveFigures::from_trade(&open, 7.8, 100.0);
        assert_eq!(figures.put_premium, None);
        assert_eq!(figures.contracts_text, "1P");
    }
}
