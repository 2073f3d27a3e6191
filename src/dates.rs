// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;

/// Map a user preference pattern to a chrono format string.
fn chrono_pattern(pattern: &str) -> Option<&'static str> {
    match pattern {
        "DD/MM/YYYY" => Some("%d/%m/%Y"),
        "MM/DD/YYYY" => Some("%m/%d/%Y"),
        "YYYY-MM-DD" => Some("%Y-%m-%d"),
        "DD-MM-YYYY" => Some("%d-%m-%Y"),
        _ => None,
    }
}

/// Render a date in the user's preferred pattern. Unknown patterns fall
/// back to ISO rendering rather than erroring.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    match chrono_pattern(pattern) {
        Some(fmt) => date.format(fmt).to_string(),
        None => date.to_string(),
    }
}

/// Parse a date in the user's preferred pattern. Unknown patterns are
/// tried as ISO.
pub fn parse_date_with(s: &str, pattern: &str) -> Option<NaiveDate> {
    let fmt = chrono_pattern(pattern).unwrap_or("%Y-%m-%d");
    NaiveDate::parse_from_str(s, fmt).ok()
}

/// First and last day of the given calendar month (1-based).
pub fn month_range(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let last_day = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        _ => return Err(anyhow::anyhow!("Invalid month number {}", month)),
    };
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid month {}-{:02}", year, month))?;
    let end = NaiveDate::from_ymd_opt(year, month, last_day)
        .ok_or_else(|| anyhow::anyhow!("Invalid month {}-{:02}", year, month))?;
    Ok((start, end))
}

/// First and last day of the given calendar year.
pub fn year_range(year: i32) -> Result<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid year {}", year))?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31)
        .ok_or_else(|| anyhow::anyhow!("Invalid year {}", year))?;
    Ok((start, end))
}

/// The week containing `day`. Weeks run Sunday through Saturday.
pub fn week_range(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let week = day.week(Weekday::Sun);
    (week.first_day(), week.last_day())
}

/// English long month name for a 1-based month number.
pub fn month_name(month: u32) -> String {
    match NaiveDate::from_ymd_opt(2000, month, 1) {
        Some(d) => d.format("%B").to_string(),
        None => String::new(),
    }
}

/// English short month name for a 1-based month number.
pub fn short_month_name(month: u32) -> String {
    match NaiveDate::from_ymd_opt(2000, month, 1) {
        Some(d) => d.format("%b").to_string(),
        None => String::new(),
    }
}

/// Render an amount with its currency code, two decimal places.
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    format!("{} {:.2}", currency, amount.round_dp(2))
}

/// Parse "YYYY-MM" into (year, month).
pub fn parse_year_month(s: &str) -> Result<(i32, u32)> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 2 {
        return Err(anyhow::anyhow!("Invalid month '{}', expected YYYY-MM", s));
    }
    let year: i32 = parts[0].parse()?;
    let month: u32 = parts[1].parse()?;
    if !(1..=12).contains(&month) {
        return Err(anyhow::anyhow!("Invalid month number {}", month));
    }
    Ok((year, month))
}
