//! Number and date formatting for the streak panel (en-US conventions).

use chrono::NaiveDate;

use crate::utils::TimeUtils;

/// Insert `,` every three digits: `-1234567` -> `-1,234,567`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Whole-number money figure: rounded half up, then grouped. `2285.5` -> `2,286`.
pub fn format_number(value: f64) -> String {
    group_thousands((value + 0.5).floor() as i64)
}

/// Grouped figure keeping up to three decimals, trailing zeros dropped. `1234.5` -> `1,234.5`.
pub fn format_locale(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let whole: i64 = whole.parse().unwrap_or(0);
    let sign = if value < 0.0 && (whole != 0 || !fraction.is_empty()) {
        "-"
    } else {
        ""
    };

    if fraction.is_empty() {
        format!("{}{}", sign, group_thousands(whole))
    } else {
        format!("{}{}.{}", sign, group_thousands(whole), fraction)
    }
}

/// Plain number the way a browser prints it: `2` not `2.0`, `1.5` stays `1.5`.
pub fn js_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, TimeUtils::STANDARD_TIME_FORMAT).ok()
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// `2024-01-01` -> `Monday, 1st January 2024`. Unparseable input is returned as is.
pub fn format_date(date_str: &str) -> String {
    use chrono::Datelike;

    match parse_date(date_str) {
        Some(date) => format!(
            "{}, {}{} {}",
            date.format("%A"),
            date.day(),
            ordinal_suffix(date.day()),
            date.format("%B %Y")
        ),
        None => date_str.to_string(),
    }
}

/// `2024-01-05` -> `Jan 5`. Unparseable input is returned as is.
pub fn format_short_date(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(date) => date.format("%b %-d").to_string(),
        None => date_str.to_string(),
    }
}

/// Minimal escaping for text dropped into the panel markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(2285), "2,285");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-45_000), "-45,000");
    }

    #[test]
    fn money_rounds_half_up() {
        assert_eq!(format_number(2285.4), "2,285");
        assert_eq!(format_number(2285.5), "2,286");
        assert_eq!(format_number(-2.5), "-2");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn locale_keeps_three_decimals() {
        assert_eq!(format_locale(3_588_000.0), "3,588,000");
        assert_eq!(format_locale(1234.5), "1,234.5");
        assert_eq!(format_locale(0.12345), "0.123");
        assert_eq!(format_locale(-1500.25), "-1,500.25");
    }

    #[test]
    fn browser_style_numbers() {
        assert_eq!(js_number(2.0), "2");
        assert_eq!(js_number(1.5), "1.5");
        assert_eq!(js_number(-3.0), "-3");
    }

    #[test]
    fn long_and_short_dates() {
        assert_eq!(format_date("2024-01-01"), "Monday, 1st January 2024");
        assert_eq!(format_date("2025-03-22"), "Saturday, 22nd March 2025");
        assert_eq!(format_date("2025-03-23"), "Sunday, 23rd March 2025");
        assert_eq!(format_date("2025-03-11"), "Tuesday, 11th March 2025");
        assert_eq!(format_short_date("2024-01-05"), "Jan 5");
        assert_eq!(format_short_date("2025-12-25"), "Dec 25");
        assert_eq!(format_short_date("soon"), "soon");
    }

    #[test]
    fn escaping() {
        assert_eq!(escape_html("<b>\"S&P\"</b>"), "&lt;b&gt;&quot;S&amp;P&quot;&lt;/b&gt;");
        assert_eq!(escape_html("SPY"), "SPY");
    }
}
