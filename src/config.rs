//! Configuration for whole-frame cleaning.
//!
//! A `CleaningConfig` names the strictness used by every standardizer and
//! the columns to run through each one. Column names refer to headers
//! after header cleaning when that step is enabled.

use crate::error::{DfUtilsError, Result};
use crate::models::{ColumnKind, Strictness};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// A column and the standardizer it is run through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRule {
    pub column: String,
    pub kind: ColumnKind,
}

/// Settings for [`crate::frame::clean_frame`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningConfig {
    /// Give-up policy shared by the money and date standardizers
    pub strictness: Strictness,

    /// Trim surrounding whitespace from every string cell first
    pub strip_cells: bool,

    /// Trim, lowercase and accent-fold column headers
    pub clean_headers: bool,

    /// Columns to standardize, applied in order
    pub columns: Vec<ColumnRule>,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            strictness: Strictness::Lenient,
            strip_cells: true,
            clean_headers: true,
            columns: Vec::new(),
        }
    }
}

impl CleaningConfig {
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Add a column rule
    pub fn with_column(mut self, column: impl Into<String>, kind: ColumnKind) -> Self {
        self.columns.push(ColumnRule {
            column: column.into(),
            kind,
        });
        self
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for rule in &self.columns {
            if rule.column.trim().is_empty() {
                return Err(DfUtilsError::configuration(
                    "Column rule with an empty column name",
                ));
            }

            if !seen.insert(rule.column.as_str()) {
                return Err(DfUtilsError::configuration(format!(
                    "Column '{}' has more than one rule",
                    rule.column
                )));
            }
        }

        debug!("Validated cleaning config with {} column rules", self.columns.len());
        Ok(())
    }
}
