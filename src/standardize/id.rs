//! National ID normalization

use crate::constants::{ID_LENGTH, ID_PAD_CHAR, ID_PUNCTUATION};
use crate::models::Strictness;

/// Strip `'`, `.` and `-` from an ID and left-pad it with zeros to 11 characters
///
/// Absent input yields an empty string in every mode. IDs already 11
/// characters or longer are returned unpadded and untruncated, and
/// non-digit characters are kept as they are.
///
/// The strictness argument has no effect: there is no input that this function
/// rejects. It is accepted so all standardizers share one call shape.
pub fn standardize_id(raw: Option<&str>, _strictness: Strictness) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    let stripped: String = raw.chars().filter(|c| !ID_PUNCTUATION.contains(c)).collect();
    zero_pad(&stripped, ID_LENGTH)
}

fn zero_pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }

    let mut padded = String::with_capacity(width);
    padded.extend(std::iter::repeat_n(ID_PAD_CHAR, width - len));
    padded.push_str(value);
    padded
}
