//! Panel markup. Pure: trades in, HTML out.

use crate::config::TRACK;
use crate::domain::{CurrentSnapshot, OpenTrade, Trade};

use super::format::{escape_html, format_locale, format_number, format_short_date};
use super::streak::{
    ExitStatus, LiveFigures, StreakTotals, calculate_streak, contracts_breakdown,
    format_exit_status, leg_premiums_label, strikes_label,
};

const GREEN: &str = "#4ade80";
const RED: &str = "#ef4444";
const AMBER: &str = "#f59e0b";
const LABEL: &str = "font-size: 11px; color: #666; text-transform: uppercase;";
const ROW: &str = "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; padding-bottom: 12px; border-bottom: 1px solid #333;";

pub const EMPTY_PANEL: &str = r#"<p style="color: #666;">No trade data available</p>"#;

/// Render the whole panel for one poll.
pub fn render(trades: &[Trade], current: Option<&CurrentSnapshot>) -> String {
    if trades.is_empty() {
        return EMPTY_PANEL.to_string();
    }

    let streak = calculate_streak(trades);
    let live = current.and_then(|c| c.live_trade().map(|t| (c, t)));

    let mut html = String::from(
        r#"<div style="font-family: 'IBM Plex Mono', monospace; font-size: 13px;">"#,
    );
    html.push_str(&streak_header(&streak, live.is_some()));

    for (idx, trade) in streak.iter().enumerate() {
        html.push_str(&day_card(idx + 1, trade));
    }

    if let Some((snapshot, trade)) = live {
        html.push_str(&live_card(streak.len() + 1, snapshot, trade));
    }

    html.push_str("</div>");
    html
}

fn streak_header(streak: &[&Trade], has_live_trade: bool) -> String {
    if streak.is_empty() && !has_live_trade {
        return r#"<div style="margin-bottom: 16px; padding-bottom: 12px; border-bottom: 1px solid #333;"><span style="font-size: 11px; color: #666;">No active streak</span></div>"#.to_string();
    }

    // An open trade counts as a streak day, but only realised P&L is totalled.
    let days = streak.len() + usize::from(has_live_trade);
    let plural = if days > 1 { "s" } else { "" };
    let totals = StreakTotals::sum(streak);

    format!(
        r#"<div style="{ROW}"><div><span style="{LABEL} letter-spacing: 0.5px;">Streak</span><div style="font-size: 20px; font-weight: 600; color: {GREEN};">{days} Day{plural}</div></div><div style="text-align: right;"><span style="{LABEL}">Total P&amp;L</span><div style="font-size: 18px; font-weight: 600; color: {GREEN};">HKD {hkd} <span style="font-size: 11px; color: #666; font-weight: 400;">(USD {usd})</span></div></div></div><div style="{ROW}"><div><span style="{LABEL} letter-spacing: 0.5px;">Implied Notional</span><div style="font-size: 16px; font-weight: 500; color: #888;">HKD {notional}</div></div></div>"#,
        hkd = format_number(totals.hkd),
        usd = format_number(totals.usd),
        notional = format_locale(totals.notional_hkd),
    )
}

/// Fields shared by the closed-day and live cards.
struct CardBody<'a> {
    day: usize,
    date: &'a str,
    accent: &'static str,
    hkd: f64,
    usd: f64,
    symbol: &'a str,
    strategy: &'a str,
    entry_time: &'a str,
    strikes: String,
    contracts: String,
    notional_hkd: f64,
    premiums: String,
    stop_loss: Option<f64>,
}

fn card_body(card: &CardBody) -> String {
    let stop = card
        .stop_loss
        .filter(|m| *m != 0.0)
        .map(|m| format!(r#"<span style="color: #666;">Stop: {m:.1}x</span>"#))
        .unwrap_or_default();

    format!(
        r#"<div style="display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 10px;"><div><span style="font-size: 13px; font-weight: 600; color: #fff;">Day {day}</span><span style="font-size: 11px; color: #555; margin-left: 8px;">{date}</span></div><div style="font-size: 14px; font-weight: 600; color: {accent};">HKD {hkd} <span style="font-size: 10px; color: #555; font-weight: 400;">(USD {usd})</span></div></div><div style="display: grid; grid-template-columns: 1fr 1fr; gap: 6px; font-size: 11px; margin-bottom: 10px;"><div><span style="color: #555;">{symbol}</span><span style="color: #888; margin-left: 4px;">{strategy}</span></div><div style="text-align: right;"><span style="color: #555;">Entry</span><span style="color: #888; margin-left: 4px;">{entry}</span></div><div><span style="color: #555;">Strikes</span><span style="color: #888; margin-left: 4px;">{strikes}</span></div><div style="text-align: right;"><span style="color: #555;">Contracts</span><span style="color: #888; margin-left: 4px;">{contracts}</span></div><div><span style="color: #555;">Implied Notional</span></div><div style="text-align: right;"><span style="color: #888;">HKD {notional}</span></div></div><div style="display: flex; justify-content: space-between; font-size: 10px; color: #444; margin-bottom: 8px;"><span>{premiums}</span>{stop}</div>"#,
        day = card.day,
        date = escape_html(&format_short_date(card.date)),
        accent = card.accent,
        hkd = format_number(card.hkd),
        usd = format_number(card.usd),
        symbol = escape_html(card.symbol),
        strategy = escape_html(card.strategy),
        entry = escape_html(card.entry_time),
        strikes = card.strikes,
        contracts = card.contracts,
        notional = format_locale(card.notional_hkd),
        premiums = card.premiums,
    )
}

fn day_card(day: usize, trade: &Trade) -> String {
    let exit = format_exit_status(trade);
    let (badge_bg, badge_fg) = match exit {
        ExitStatus::Stopped => ("rgba(239, 68, 68, 0.15)", RED),
        _ => ("rgba(74, 222, 128, 0.1)", GREEN),
    };
    let cost_to_close = trade
        .cost_to_close
        .filter(|c| *c != 0.0)
        .map(|c| format!(" @ {c:.2}"))
        .unwrap_or_default();

    let body = card_body(&CardBody {
        day,
        date: &trade.date,
        accent: GREEN,
        hkd: trade.entry_premium.unwrap_or(0.0),
        usd: trade.premium_received.unwrap_or(0.0),
        symbol: &trade.symbol,
        strategy: &trade.strategy,
        entry_time: &trade.entry_time,
        strikes: strikes_label(trade.put_strike, trade.call_strike),
        contracts: contracts_breakdown(
            trade.contracts,
            trade.put_strike.is_some(),
            trade.call_strike.is_some(),
        ),
        notional_hkd: trade.total_notional_hkd.unwrap_or(0.0),
        premiums: leg_premiums_label(trade.leg1_premium, trade.leg2_premium),
        stop_loss: trade.stop_loss_multiplier,
    });

    format!(
        r#"<div style="padding: 12px; margin-bottom: 8px; background: rgba(255,255,255,0.02); border-radius: 4px;">{body}<div style="display: flex; justify-content: space-between; align-items: center; padding-top: 8px; border-top: 1px solid #222;"><span style="font-size: 10px; padding: 2px 8px; background: {badge_bg}; color: {badge_fg}; border-radius: 3px;">{exit}</span><span style="font-size: 10px; color: #444;">Exit {exit_time}{cost_to_close}</span></div></div>"#,
        exit_time = escape_html(&trade.exit_time),
    )
}

fn live_card(day: usize, snapshot: &CurrentSnapshot, trade: &OpenTrade) -> String {
    let figures = LiveFigures::from_trade(trade, TRACK.hkd_rate, TRACK.contract_multiplier);

    let body = card_body(&CardBody {
        day,
        date: &snapshot.today_str,
        accent: AMBER,
        hkd: figures.premium_sold_hkd,
        usd: figures.premium_sold_usd,
        symbol: &trade.symbol,
        strategy: &trade.strategy,
        entry_time: &trade.entry_time,
        strikes: strikes_label(figures.put_strike, figures.call_strike),
        contracts: figures.contracts_text.clone(),
        notional_hkd: figures.notional_hkd,
        premiums: leg_premiums_label(figures.put_premium, figures.call_premium),
        stop_loss: trade.stop_loss_multiplier,
    });

    let closes_in = snapshot
        .time_until_close
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(|t| {
            format!(
                r#"<span style="font-size: 10px; color: #666;">Closes in {}</span>"#,
                escape_html(t)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div style="padding: 12px; margin-bottom: 8px; background: rgba(245, 158, 11, 0.06); border-radius: 4px; border-left: 2px solid {AMBER};">{body}<div style="display: flex; justify-content: space-between; align-items: center; padding-top: 8px; border-top: 1px solid #333;"><span style="font-size: 10px; padding: 2px 8px; background: rgba(245, 158, 11, 0.15); color: {AMBER}; border-radius: 3px;">Open</span>{closes_in}</div></div>"#
    )
}
