//! Calendar date standardization
//!
//! Accepts ISO dates, day-first slash dates with four- or two-digit years,
//! and spreadsheet serial numbers from the 1900 date system. Any time of
//! day following the date is discarded.

use super::{Rule, first_match, unmatched};
use crate::constants::{TWO_DIGIT_YEAR_PIVOT, spreadsheet};
use crate::error::Result;
use crate::models::{Standardized, Strictness};
use chrono::{Datelike, Days, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Latest year a standardized date may carry
const MAX_YEAR: i32 = 9999;

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("valid ISO date pattern")
});

static DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$").expect("valid D/M/YYYY pattern")
});

static DAY_MONTH_SHORT_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{2})$").expect("valid D/M/YY pattern")
});

/// Date rules in priority order
pub(crate) const DATE_RULES: &[Rule<NaiveDate>] = &[
    ("iso", iso_date),
    ("day_month_year", day_month_year),
    ("day_month_short_year", day_month_short_year),
    ("spreadsheet_serial", spreadsheet_serial),
];

/// Standardize a date cell into a calendar date
///
/// Absent input is always `Missing`, even in Strict mode. Present input is
/// trimmed and cut at the first whitespace before the rules run. A pattern
/// that matches but names an impossible date (e.g. `31/02/2000`) falls
/// through to the next rule.
pub fn standardize_date(
    raw: Option<&str>,
    strictness: Strictness,
) -> Result<Standardized<NaiveDate>> {
    let Some(raw) = raw else {
        return Ok(Standardized::Missing);
    };

    let token = raw.split_whitespace().next().unwrap_or("");
    match first_match(DATE_RULES, token, "date") {
        Some(date) => Ok(Standardized::Value(date)),
        None => unmatched(raw, strictness, "date"),
    }
}

/// Convert a 1900-system spreadsheet serial into a calendar date
///
/// Serial 1 is 1900-01-01. The 1900 system counts a non-existent
/// 1900-02-29 as serial 60, so serials from 60 on are shifted back one day.
/// Negative serials count back from the epoch. Serials that overflow the
/// calendar or land past year 9999 yield `None`.
pub fn serial_to_date(serial: i64) -> Option<NaiveDate> {
    let offset = if serial >= spreadsheet::PHANTOM_LEAP_DAY {
        serial - 1
    } else {
        serial
    };

    let (year, month, day) = spreadsheet::EPOCH;
    let epoch = NaiveDate::from_ymd_opt(year, month, day)?;
    let days = Days::new(offset.unsigned_abs());
    let date = if offset < 0 {
        epoch.checked_sub_days(days)
    } else {
        epoch.checked_add_days(days)
    };
    date.filter(|date| date.year() <= MAX_YEAR)
}

fn iso_date(s: &str) -> Option<NaiveDate> {
    let caps = ISO_DATE.captures(s)?;
    build_date(caps[1].parse().ok()?, &caps[2], &caps[3])
}

fn day_month_year(s: &str) -> Option<NaiveDate> {
    let caps = DAY_MONTH_YEAR.captures(s)?;
    build_date(caps[3].parse().ok()?, &caps[2], &caps[1])
}

fn day_month_short_year(s: &str) -> Option<NaiveDate> {
    let caps = DAY_MONTH_SHORT_YEAR.captures(s)?;
    let year = expand_two_digit_year(caps[3].parse().ok()?);
    build_date(year, &caps[2], &caps[1])
}

fn spreadsheet_serial(s: &str) -> Option<NaiveDate> {
    serial_to_date(s.parse::<i64>().ok()?)
}

fn build_date(year: i32, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

fn expand_two_digit_year(year: i32) -> i32 {
    if year <= TWO_DIGIT_YEAR_PIVOT {
        2000 + year
    } else {
        1900 + year
    }
}
