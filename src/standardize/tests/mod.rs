//! Test utilities shared by the standardizer test modules

use crate::models::{Standardized, Strictness};
use chrono::NaiveDate;

mod id_tests;

/// Lenient money standardization of a present cell
pub fn money(raw: &str) -> Standardized<f64> {
    super::standardize_money(Some(raw), Strictness::Lenient).unwrap()
}

/// Lenient date standardization of a present cell
pub fn date(raw: &str) -> Standardized<NaiveDate> {
    super::standardize_date(Some(raw), Strictness::Lenient).unwrap()
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
