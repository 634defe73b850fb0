//! Lineage tag extraction from source file names
//!
//! Source files are expected to end in `_dd.mm.yyyy.csv`. A missing or
//! malformed tag means the wrong file reached the pipeline, so these
//! functions always fail loudly; there is no lenient mode.

use crate::constants::{LINEAGE_DATE_FORMAT, LINEAGE_TAG_PATTERN};
use crate::error::{DfUtilsError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static LINEAGE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINEAGE_TAG_PATTERN).expect("valid lineage tag pattern"));

/// Extract the mandatory `_dd.mm.yyyy.csv` date from a lineage-tagged string
pub fn extract_embedded_date(raw: &str) -> Result<NaiveDate> {
    let caps = LINEAGE_TAG
        .captures(raw)
        .ok_or_else(|| DfUtilsError::MissingLineageTag {
            input: raw.to_string(),
        })?;

    let date = NaiveDate::parse_from_str(&caps[1], LINEAGE_DATE_FORMAT).map_err(|source| {
        DfUtilsError::InvalidLineageDate {
            input: raw.to_string(),
            source,
        }
    })?;

    debug!("Extracted lineage date {} from '{}'", date, raw);
    Ok(date)
}

/// Extract the lineage date from the file name component of `path`
pub fn extract_path_date(path: &Path) -> Result<NaiveDate> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .ok_or_else(|| DfUtilsError::MissingLineageTag {
            input: path.display().to_string(),
        })?;

    extract_embedded_date(&file_name)
}
