//! Tests for national ID normalization

use crate::models::Strictness;
use crate::standardize::standardize_id;

fn id(raw: &str) -> String {
    standardize_id(Some(raw), Strictness::Lenient)
}

#[test]
fn test_punctuation_removed_and_padded() {
    let cases = [
        ("'123.456.789-10", "12345678910"),
        ("123.456.789-01", "12345678901"),
        ("12345678901", "12345678901"),
        ("000000123-45", "00000012345"),
        ("123", "00000000123"),
        ("", "00000000000"),
    ];

    for (raw, expected) in cases {
        assert_eq!(id(raw), expected, "input: {raw:?}");
    }
}

#[test]
fn test_long_ids_are_not_truncated() {
    assert_eq!(id("12.345.678/0001-95"), "12345678/000195");
}

#[test]
fn test_non_digits_survive() {
    assert_eq!(id("ab-12"), "0000000ab12");
}

#[test]
fn test_normalization_is_idempotent() {
    for raw in ["12345678910", "'123.456.789-10", "42"] {
        let once = id(raw);
        assert_eq!(id(&once), once);
    }
}

#[test]
fn test_absent_input_is_empty_in_every_mode() {
    assert_eq!(standardize_id(None, Strictness::Lenient), "");
    assert_eq!(standardize_id(None, Strictness::Strict), "");
}

#[test]
fn test_strictness_has_no_effect() {
    assert_eq!(
        standardize_id(Some("x.y"), Strictness::Strict),
        standardize_id(Some("x.y"), Strictness::Lenient)
    );
}
