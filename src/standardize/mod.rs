//! Cell standardizers for locale-ambiguous values
//!
//! Each standardizer is a pure function that tries an ordered list of
//! rules and stops at the first one that produces a value. The order is
//! part of the contract: a string that could satisfy two loosely-written
//! patterns is always resolved by the earlier rule.
//!
//! ## Architecture
//!
//! - [`money`] - monetary amounts with comma or dot decimal separators
//! - [`date`] - ISO, day-first slash dates and spreadsheet serials
//! - [`id`] - national ID punctuation stripping and zero padding
//! - [`lineage`] - mandatory `_dd.mm.yyyy.csv` tags in file names
//!
//! ## Usage
//!
//! ```rust
//! use dfutils::standardize::{standardize_date, standardize_money};
//! use dfutils::{Standardized, Strictness};
//!
//! # fn example() -> dfutils::Result<()> {
//! let amount = standardize_money(Some("R$ 1.234,56"), Strictness::Lenient)?;
//! assert_eq!(amount, Standardized::Value(1234.56));
//!
//! let date = standardize_date(Some("1/2/2000 10:30"), Strictness::Strict)?;
//! assert!(!date.is_missing());
//! # Ok(())
//! # }
//! ```

pub mod date;
pub mod id;
pub mod lineage;
pub mod money;

#[cfg(test)]
pub mod tests;

use crate::error::{DfUtilsError, Result};
use crate::models::{Standardized, Strictness};
use tracing::debug;

// Re-export main functions for easy access
pub use date::{serial_to_date, standardize_date};
pub use id::standardize_id;
pub use lineage::{extract_embedded_date, extract_path_date};
pub use money::standardize_money;

/// A named rule in a standardization chain
pub(crate) type Rule<T> = (&'static str, fn(&str) -> Option<T>);

/// Run `input` through `rules` in order, returning the first match
pub(crate) fn first_match<T: std::fmt::Debug>(
    rules: &[Rule<T>],
    input: &str,
    kind: &str,
) -> Option<T> {
    rules.iter().find_map(|(name, rule)| {
        let value = rule(input)?;
        debug!("{} rule '{}' matched '{}' -> {:?}", kind, name, input, value);
        Some(value)
    })
}

/// Apply the give-up policy once every rule has failed
pub(crate) fn unmatched<T>(raw: &str, strictness: Strictness, kind: &str) -> Result<Standardized<T>> {
    match strictness {
        Strictness::Strict => Err(DfUtilsError::irrecognizable(raw)),
        Strictness::Lenient => {
            debug!("No {} rule matched '{}', marking as missing", kind, raw);
            Ok(Standardized::Missing)
        }
    }
}
