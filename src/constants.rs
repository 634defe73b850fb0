//! Application constants for dfutils
//!
//! Hard-coded patterns and values used by the standardizers. The accepted
//! formats are a fixed set; there is no locale configuration.

// =============================================================================
// Money
// =============================================================================

/// Currency marker removed from the front of monetary cells
pub const CURRENCY_MARKER: &str = "R$";

/// Decimal places kept by the long-fraction rounding rule
pub const MONEY_DECIMAL_PLACES: i32 = 2;

// =============================================================================
// Dates
// =============================================================================

/// Two-digit years at or below this pivot map to the 2000s, above it to the 1900s
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 68;

/// Spreadsheet (1900 date system) serial conventions
pub mod spreadsheet {
    /// Day zero of the 1900 date system
    pub const EPOCH: (i32, u32, u32) = (1899, 12, 31);

    /// Serial of the phantom 1900-02-29; later serials are shifted back a day
    pub const PHANTOM_LEAP_DAY: i64 = 60;
}

// =============================================================================
// National IDs
// =============================================================================

/// Minimum width of a normalized ID
pub const ID_LENGTH: usize = 11;

/// Character used to left-pad short IDs
pub const ID_PAD_CHAR: char = '0';

/// Punctuation stripped from ID cells
pub const ID_PUNCTUATION: &[char] = &['\'', '.', '-'];

// =============================================================================
// Lineage tags
// =============================================================================

/// Suffix pattern identifying the source date of a file
pub const LINEAGE_TAG_PATTERN: &str = r"_([0-9]{2}\.[0-9]{2}\.[0-9]{4})\.csv$";

/// chrono format of the captured lineage date
pub const LINEAGE_DATE_FORMAT: &str = "%d.%m.%Y";
