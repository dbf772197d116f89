//! # Card Expiry
//!
//! Formatting of the expiry input as it is typed, and the "not in the past"
//! check. A card is usable through the last day of its expiry month.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Leading month digits, an optional separator run, optional year digits.
static EXPIRY_INPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^0-9]*([0-9]{1,2})([^0-9]+)?([0-9]{1,4})?")
        .expect("expiry input pattern is a valid regex")
});

/// The separator between month and year in the displayed expiry.
pub const EXPIRY_SEPARATOR: &str = " / ";

/// Normalize expiry input towards `MM / YY`.
///
/// - Once year digits are present the separator is canonicalised.
/// - A dangling `" /"` means the user is deleting the separator, so it goes
///   and the month is cut back to one digit.
/// - A complete month, or a month followed by any separator, gets the
///   separator appended.
/// - A single digit 2-9 can only be a month on its own, so it is zero
///   padded.
///
/// Input without any digit formats to the empty string.
pub fn format_expiry(raw: &str) -> String {
    let Some(caps) = EXPIRY_INPUT.captures(raw) else {
        return String::new();
    };
    let mut month = caps.get(1).map_or("", |m| m.as_str()).to_string();
    let mut sep = caps.get(2).map_or("", |m| m.as_str());
    let year = caps.get(3).map_or("", |m| m.as_str());

    if !year.is_empty() {
        sep = EXPIRY_SEPARATOR;
    } else if sep == " /" {
        month.truncate(1);
        sep = "";
    } else if month.len() == 2 || !sep.is_empty() {
        sep = EXPIRY_SEPARATOR;
    } else if month != "0" && month != "1" {
        month.insert(0, '0');
        sep = EXPIRY_SEPARATOR;
    }

    format!("{month}{sep}{year}")
}

/// Whether the expiry `month` / `year` is well formed and not before the
/// month containing `today`.
///
/// Both parts are trimmed and must be all digits. The month must be 1-12.
/// A two-digit year below 70 is read as 20yy, otherwise 19yy; after that
/// expansion the year must have four digits.
pub fn expiry_valid_on(month: &str, year: &str, today: NaiveDate) -> bool {
    let (month, year) = (month.trim(), year.trim());
    if !is_digits(month) || !is_digits(year) {
        return false;
    }
    let Ok(month) = month.parse::<u32>() else {
        return false;
    };
    if !(1..=12).contains(&month) {
        return false;
    }

    let year = match year.len() {
        2 => match year.parse::<i32>() {
            Ok(yy) if yy < 70 => 2000 + yy,
            Ok(yy) => 1900 + yy,
            Err(_) => return false,
        },
        4 => match year.parse::<i32>() {
            Ok(yyyy) => yyyy,
            Err(_) => return false,
        },
        _ => return false,
    };

    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    match NaiveDate::from_ymd_opt(next_year, next_month, 1) {
        Some(first_invalid_day) => today < first_invalid_day,
        None => false,
    }
}

/// Split a displayed expiry (`MM / YY`) into month and year.
///
/// Returns `None` when the separator is missing.
pub fn split_expiry(value: &str) -> Option<(&str, &str)> {
    let mut parts = value.split(EXPIRY_SEPARATOR);
    let month = parts.next()?;
    let year = parts.next()?;
    Some((month, year))
}

/// The two-digit `MM / YY` display of `date`'s month.
pub fn display_expiry(date: NaiveDate) -> String {
    format!("{:02}{EXPIRY_SEPARATOR}{:02}", date.month(), date.year() % 100)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
