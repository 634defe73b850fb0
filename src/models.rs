//! Core data structures shared by the standardizers.
//!
//! Defines the strictness switch, the per-type standardization outcome
//! and the column kinds understood by the frame helpers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a standardizer reacts to input that matches none of its rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Degrade to the type's Missing marker
    #[default]
    Lenient,
    /// Return an `IrrecognizableValue` error
    Strict,
}

impl Strictness {
    pub fn is_strict(self) -> bool {
        self == Strictness::Strict
    }
}

impl From<bool> for Strictness {
    fn from(strict: bool) -> Self {
        if strict {
            Strictness::Strict
        } else {
            Strictness::Lenient
        }
    }
}

/// Outcome of standardizing a single cell
///
/// `Missing` is the type-specific "no valid value" marker: money and date
/// results each carry their own, so they cannot be mixed up by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Standardized<T> {
    Value(T),
    Missing,
}

impl<T> Standardized<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Standardized::Missing)
    }

    /// Borrow the value if present
    pub fn value(&self) -> Option<&T> {
        match self {
            Standardized::Value(v) => Some(v),
            Standardized::Missing => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Standardized::Value(v) => Some(v),
            Standardized::Missing => None,
        }
    }
}

impl<T> From<Option<T>> for Standardized<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Standardized::Missing, Standardized::Value)
    }
}

impl Standardized<f64> {
    /// Flatten to a float, using NaN as the Missing marker
    pub fn to_f64(self) -> f64 {
        match self {
            Standardized::Value(v) => v,
            Standardized::Missing => f64::NAN,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Standardized<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Standardized::Value(v) => write!(f, "{}", v),
            Standardized::Missing => write!(f, "<missing>"),
        }
    }
}

/// Which standardizer a frame column is run through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Money,
    Date,
    Id,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::Money => "money",
            ColumnKind::Date => "date",
            ColumnKind::Id => "id",
        };
        write!(f, "{}", name)
    }
}
