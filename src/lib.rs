//! dfutils Library
//!
//! A Rust library for standardizing messy, locale-ambiguous tabular cell
//! values into canonical forms ready for analysis.
//!
//! This library provides tools for:
//! - Disambiguating monetary amounts written with decimal commas or dots
//! - Parsing ISO, day-first slash and spreadsheet-serial dates
//! - Normalizing national ID numbers to a fixed zero-padded width
//! - Extracting mandatory `_dd.mm.yyyy.csv` lineage dates from file names
//! - Trimming cells and cleaning headers of polars `DataFrame`s
//!
//! Every cell standardizer is a pure function. Unrecognized input becomes
//! [`Standardized::Missing`] by default, or an
//! [`DfUtilsError::IrrecognizableValue`] when [`Strictness::Strict`] is
//! requested.

pub mod config;
pub mod constants;
pub mod error;
pub mod frame;
pub mod models;
pub mod standardize;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::{CleaningConfig, ColumnRule};
pub use error::{DfUtilsError, Result};
pub use models::{ColumnKind, Standardized, Strictness};
pub use standardize::{extract_embedded_date, standardize_date, standardize_id, standardize_money};
