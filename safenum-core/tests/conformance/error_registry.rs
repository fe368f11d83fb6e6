//! Conformance: Error Code Registry
//!
//! Asserts the registry exists and matches the expected exact list and
//! order. Front ends key user-facing messages on these codes.

use safenum_core::errors::{is_valid_error_code, ERROR_CODES};

/// Exact list and order.
#[test]
fn conformance_error_registry_exact_list() {
    let expected: [&str; 4] = [
        "INVALID_KEY_ENCODING",
        "EMPTY_KEY_SET",
        "MALFORMED_DIGEST",
        "ENCODING_ERROR",
    ];
    assert_eq!(ERROR_CODES, expected);
}

/// Codes are SCREAMING_SNAKE_CASE ASCII.
#[test]
fn conformance_error_registry_format() {
    for code in &ERROR_CODES {
        assert!(
            code.bytes().all(|b| b.is_ascii_uppercase() || b == b'_'),
            "malformed error code: {code}"
        );
    }
}

#[test]
fn conformance_error_registry_lookup() {
    assert!(is_valid_error_code("EMPTY_KEY_SET"));
    assert!(!is_valid_error_code("KEY_MISMATCH"));
}
