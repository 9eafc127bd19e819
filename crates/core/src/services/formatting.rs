//! Display formatting for amounts and dates.
//!
//! Both functions are total: they never panic, and input they cannot make
//! sense of comes back unchanged.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use std::str::FromStr;

/// Currency codes with a dedicated en-US symbol.
const CURRENCY_SYMBOLS: [(&str, &str); 7] = [
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("INR", "₹"),
    ("CAD", "CA$"),
    ("AUD", "A$"),
];

/// Format an amount the way an en-US locale renders currency:
/// `$1,234.50`, `-$12.00`, `PLN 3.10` for codes without a symbol.
///
/// Cents are rounded half away from zero on the shortest decimal form of
/// the amount, so `1.005` renders as `$1.01`. Non-finite values are not
/// amounts and come back as their string form.
#[must_use]
pub fn format_currency(amount: f64, currency_code: &str) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let (negative, fixed) = match to_cents(amount) {
        Some(rounded) => (
            rounded.is_sign_negative() && !rounded.is_zero(),
            format!("{:.2}", rounded.abs()),
        ),
        // Beyond Decimal's range
        None => (amount < 0.0, format!("{:.2}", amount.abs())),
    };
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_thousands(whole);
    let sign = if negative { "-" } else { "" };

    let code = currency_code.trim().to_uppercase();
    match CURRENCY_SYMBOLS.iter().find(|(c, _)| *c == code) {
        Some((_, symbol)) => format!("{sign}{symbol}{grouped}.{cents}"),
        None if code.is_empty() => format!("{sign}{grouped}.{cents}"),
        None => format!("{sign}{code}\u{a0}{grouped}.{cents}"),
    }
}

/// Round to cents. `f64`'s `Display` is the shortest form that reads back
/// to the same value, which is what a user typed or the backend sent.
fn to_cents(amount: f64) -> Option<Decimal> {
    let exact = Decimal::from_str(&amount.to_string())
        .or_else(|_| Decimal::try_from(amount))
        .ok()?;
    Some(exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Like [`format_currency`], for values straight out of a JSON payload.
/// Anything that is not a number is returned as its string representation.
#[must_use]
pub fn format_currency_value(value: &Value, currency_code: &str) -> String {
    match value.as_f64() {
        Some(amount) => format_currency(amount, currency_code),
        None => match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    }
}

/// Render a date as `Jan 1, 2023`, interpreted in UTC.
///
/// Empty, unparsable or otherwise invalid input is returned unchanged.
#[must_use]
pub fn format_date(input: &str) -> String {
    match parse_date(input) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => input.to_string(),
    }
}

/// Parse the date shapes the backend emits into a UTC timestamp.
///
/// Date-only and zone-less values are taken as UTC.
#[must_use]
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|dt| dt.and_utc())
}

/// Percentage with a fixed number of decimals, e.g. `42.5%`.
#[must_use]
pub fn format_percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    format!("{value:.decimals$}%")
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Amount as it appears in a number input: no grouping, no trailing zeros
/// (`1500` → `"1500"`, `12.5` → `"12.5"`).
#[must_use]
pub fn format_amount_input(amount: f64) -> String {
    amount.to_string()
}
