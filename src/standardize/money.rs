//! Monetary amount standardization
//!
//! Resolves decimal-comma vs. thousands-comma ambiguity with a fixed rule
//! order. Amounts are returned as `f64` with at most two intended decimals.

use super::{Rule, first_match, unmatched};
use crate::constants::{CURRENCY_MARKER, MONEY_DECIMAL_PLACES};
use crate::error::Result;
use crate::models::{Standardized, Strictness};
use regex::Regex;
use std::sync::LazyLock;

static PURE_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("valid pure integer pattern"));

static SHORT_FRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)[,.]([0-9]{1,2})$").expect("valid short fraction pattern")
});

static GROUPED_INTEGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,3}(?:(?:\.[0-9]{3})+|(?:,[0-9]{3})+)$")
        .expect("valid grouped integer pattern")
});

static DOT_GROUPED_COMMA_DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,3}(?:\.[0-9]{3})*),([0-9]{1,2})$")
        .expect("valid dot grouped pattern")
});

static COMMA_GROUPED_DOT_DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,3}(?:,[0-9]{3})*)\.([0-9]{1,2})$")
        .expect("valid comma grouped pattern")
});

static LONG_FRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)[,.]([0-9]{4,})$").expect("valid long fraction pattern")
});

/// Money rules in priority order
pub(crate) const MONEY_RULES: &[Rule<f64>] = &[
    ("pure_integer", pure_integer),
    ("short_fraction", short_fraction),
    ("grouped_integer", grouped_integer),
    ("dot_grouped_comma_decimal", dot_grouped_comma_decimal),
    ("comma_grouped_dot_decimal", comma_grouped_dot_decimal),
    ("long_fraction", long_fraction),
];

/// Standardize a monetary cell into a two-decimal amount
///
/// Absent input is always `Missing`, even in Strict mode. Present input is
/// uppercased, stripped of a leading `R$` and trimmed before the rules run.
/// When no rule matches, Strict mode returns `IrrecognizableValue` carrying
/// the raw input and Lenient mode returns `Missing`.
pub fn standardize_money(raw: Option<&str>, strictness: Strictness) -> Result<Standardized<f64>> {
    let Some(raw) = raw else {
        return Ok(Standardized::Missing);
    };

    let cleaned = strip_currency(raw);
    match first_match(MONEY_RULES, &cleaned, "money") {
        Some(amount) => Ok(Standardized::Value(amount)),
        None => unmatched(raw, strictness, "money"),
    }
}

fn strip_currency(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    upper
        .strip_prefix(CURRENCY_MARKER)
        .unwrap_or(&upper)
        .trim()
        .to_string()
}

fn pure_integer(s: &str) -> Option<f64> {
    if !PURE_INTEGER.is_match(s) {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn short_fraction(s: &str) -> Option<f64> {
    let caps = SHORT_FRACTION.captures(s)?;
    join_decimal(&caps[1], &caps[2])
}

fn grouped_integer(s: &str) -> Option<f64> {
    if !GROUPED_INTEGER.is_match(s) {
        return None;
    }
    join_decimal(&s.replace(['.', ','], ""), "00")
}

fn dot_grouped_comma_decimal(s: &str) -> Option<f64> {
    let caps = DOT_GROUPED_COMMA_DECIMAL.captures(s)?;
    join_decimal(&caps[1].replace('.', ""), &caps[2])
}

fn comma_grouped_dot_decimal(s: &str) -> Option<f64> {
    let caps = COMMA_GROUPED_DOT_DECIMAL.captures(s)?;
    join_decimal(&caps[1].replace(',', ""), &caps[2])
}

fn long_fraction(s: &str) -> Option<f64> {
    let caps = LONG_FRACTION.captures(s)?;
    join_decimal(&caps[1], &caps[2]).map(|v| round_to(v, MONEY_DECIMAL_PLACES))
}

fn join_decimal(integer: &str, decimal: &str) -> Option<f64> {
    format!("{}.{}", integer, decimal)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Round half to even on the scaled binary value
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}
