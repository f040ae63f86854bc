// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

use crate::models::{Currency, Month};

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<Month> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(Month::of(d))
}

/// Keep only digits and render them with `.` thousand separators, the way the
/// salary field is typed in: `22500` -> `22.500`.
pub fn format_number(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return String::new();
    }
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return "0".to_string();
    }
    group_thousands(trimmed, '.')
}

/// Inverse of [`format_number`]: drop `.` separators, read the first `,` as the
/// decimal point. Empty or unparseable input is zero.
pub fn parse_number(value: &str) -> Decimal {
    let cleaned = value.trim().replace('.', "").replacen(',', ".", 1);
    // Take the longest numeric prefix, so "12abc" still reads as 12.
    let mut end = 0;
    let mut seen_point = false;
    for (i, c) in cleaned.char_indices() {
        let ok = c.is_ascii_digit() || (c == '-' && i == 0) || (c == '.' && !seen_point);
        if !ok {
            break;
        }
        if c == '.' {
            seen_point = true;
        }
        end = i + c.len_utf8();
    }
    cleaned[..end].parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// Amount typed on the command line. A comma means Turkish notation
/// (`5.000,50`); otherwise a plain decimal (`5000.50`). Garbage reads as zero.
pub fn parse_amount(value: &str) -> Decimal {
    if value.contains(',') {
        return parse_number(value);
    }
    value
        .trim()
        .parse::<Decimal>()
        .unwrap_or_else(|_| parse_number(value))
}

fn group_thousands(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

/// Currency amount with two decimals in the conventions of `language`:
/// `tr` renders `₺5.000,00`, everything else `$5,000.00`.
pub fn fmt_money(amount: Decimal, currency: &Currency, language: &str) -> String {
    let (thousands, point) = if language == "tr" { ('.', ',') } else { (',', '.') };
    let fixed = format!("{:.2}", amount.abs().round_dp(2));
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    format!(
        "{}{}{}{}{}",
        sign,
        currency.symbol,
        group_thousands(int_part, thousands),
        point,
        frac_part
    )
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Parse a persisted date. Accepts RFC 3339 instants and bare `YYYY-MM-DD`
/// (taken as local midnight).
pub fn parse_instant(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw.trim()) {
        return Some(dt.with_timezone(&Local));
    }
    let day = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()?;
    local_midnight(day)
}

pub fn local_day(raw: &str) -> Option<NaiveDate> {
    parse_instant(raw).map(|dt| dt.date_naive())
}

fn local_midnight(day: NaiveDate) -> Option<DateTime<Local>> {
    Local
        .from_local_datetime(&day.and_time(NaiveTime::MIN))
        .earliest()
        .or_else(|| {
            // Midnight can fall into a DST gap; noon always exists.
            day.and_hms_opt(12, 0, 0)
                .and_then(|noon| Local.from_local_datetime(&noon).earliest())
        })
}

/// The instant string stored for a transaction placed on `day`.
pub fn local_instant(day: NaiveDate) -> String {
    match local_midnight(day) {
        Some(dt) => dt.to_rfc3339(),
        None => day.and_time(NaiveTime::MIN).and_utc().to_rfc3339(),
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lira() -> Currency {
        Currency {
            code: "TRY".into(),
            symbol: "₺".into(),
            name: "Türk Lirası".into(),
        }
    }

    #[test]
    fn format_number_groups_digits() {
        assert_eq!(format_number("22500"), "22.500");
        assert_eq!(format_number("1.234.567"), "1.234.567");
        assert_eq!(format_number("abc"), "");
        assert_eq!(format_number("007"), "7");
        assert_eq!(format_number("000"), "0");
        assert_eq!(format_number("999"), "999");
    }

    #[test]
    fn parse_number_reads_turkish_notation() {
        assert_eq!(parse_number("22.500"), Decimal::new(22500, 0));
        assert_eq!(parse_number("1.234,5"), Decimal::new(12345, 1));
        assert_eq!(parse_number(""), Decimal::ZERO);
        assert_eq!(parse_number("abc"), Decimal::ZERO);
        assert_eq!(parse_number("12abc"), Decimal::new(12, 0));
    }

    #[test]
    fn amounts_accept_both_notations() {
        assert_eq!(parse_amount("5000.50"), Decimal::new(500050, 2));
        assert_eq!(parse_amount("5.000,50"), Decimal::new(500050, 2));
        assert_eq!(parse_amount(" 75 "), Decimal::new(75, 0));
        assert_eq!(parse_amount("lots"), Decimal::ZERO);
    }

    #[test]
    fn money_follows_language_separators() {
        let amount = Decimal::new(500050, 2);
        assert_eq!(fmt_money(amount, &lira(), "tr"), "₺5.000,50");
        assert_eq!(fmt_money(amount, &lira(), "en"), "₺5,000.50");
        assert_eq!(fmt_money(-amount, &lira(), "en"), "-₺5,000.50");
        assert_eq!(fmt_money(Decimal::ZERO, &lira(), "tr"), "₺0,00");
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn instants_resolve_to_local_days() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(local_day(&local_instant(day)), Some(day));
        assert_eq!(local_day("2024-03-01"), Some(day));
        assert_eq!(local_day("not a date"), None);
    }
}
