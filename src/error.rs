//! Error handling for cell standardization.
//!
//! Separates soft, Strict-only failures (unrecognized cell values) from
//! hard failures that indicate the wrong input was handed to the library
//! (missing lineage tags, unknown columns, bad configuration).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DfUtilsError {
    /// Raised only in Strict mode, carries the raw input for diagnostics
    #[error("Value {value} doesn't match any known pattern")]
    IrrecognizableValue { value: String },

    #[error("No '_dd.mm.yyyy.csv' lineage tag found in: {input}")]
    MissingLineageTag { input: String },

    #[error("Lineage tag in {input} is not a valid calendar date")]
    InvalidLineageDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Column not found: {column}")]
    ColumnNotFound { column: String },

    #[error("Column {column} has type {dtype}, expected a string column")]
    UnsupportedColumnType { column: String, dtype: String },

    #[error("Header cleaning produced duplicate column name: {header}")]
    DuplicateHeader { header: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl DfUtilsError {
    /// Create an unrecognized value error
    pub fn irrecognizable(value: impl Into<String>) -> Self {
        Self::IrrecognizableValue {
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether this error is the soft, Strict-mode-only failure
    pub fn is_irrecognizable(&self) -> bool {
        matches!(self, Self::IrrecognizableValue { .. })
    }
}

pub type Result<T> = std::result::Result<T, DfUtilsError>;
