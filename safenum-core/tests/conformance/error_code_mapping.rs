//! Conformance: Error Code Mapping
//!
//! Every failure path of the public API maps to exactly one registered
//! code, and no failure ever yields a partial fingerprint.

use safenum_core::errors::{FingerprintError, Side};
use safenum_core::{compute_fingerprint, compute_fingerprint_simple, IdentityKey};

fn key(fill: u8) -> IdentityKey {
    IdentityKey::from_djb_public_key(&[fill; 32])
}

// ── Conformance: FingerprintError Variant Stability ─────────────

/// Display format MUST stay stable for diagnostics.
#[test]
fn conformance_error_display_format_stable() {
    let cases: Vec<(FingerprintError, &str)> = vec![
        (
            FingerprintError::InvalidKeyEncoding { len: 3, min: 33 },
            "Invalid key encoding: 3 bytes, expected at least 33",
        ),
        (
            FingerprintError::EmptyKeySet(Some(Side::Local)),
            "Empty key set for local party",
        ),
        (
            FingerprintError::MalformedDigest { len: 10, min: 30 },
            "Malformed digest: 10 bytes, expected at least 30",
        ),
        (
            FingerprintError::Encoding("invalid base64".into()),
            "Encoding error: invalid base64",
        ),
    ];

    for (error, expected) in &cases {
        assert_eq!(
            error.to_string(),
            *expected,
            "FingerprintError display drift detected"
        );
    }
}

/// FingerprintError MUST implement std::error::Error.
#[test]
fn conformance_error_is_std_error() {
    let err = FingerprintError::Encoding("test".into());
    let _: &dyn std::error::Error = &err;
}

// ── Conformance: API Failure → Error Code ──────────────────────

#[test]
fn conformance_empty_local_set_maps_to_empty_key_set() {
    let err = compute_fingerprint(0, b"alice", &[], b"bob", &[key(1)]).unwrap_err();
    assert_eq!(err.code(), "EMPTY_KEY_SET");
    assert_eq!(err, FingerprintError::EmptyKeySet(Some(Side::Local)));
}

#[test]
fn conformance_empty_remote_set_maps_to_empty_key_set() {
    let err = compute_fingerprint(0, b"alice", &[key(1)], b"bob", &[]).unwrap_err();
    assert_eq!(err, FingerprintError::EmptyKeySet(Some(Side::Remote)));
}

/// Both empty: the local side is reported, nothing is hashed.
#[test]
fn conformance_both_empty_reports_local_first() {
    let err = compute_fingerprint(0, b"alice", &[], b"bob", &[]).unwrap_err();
    assert_eq!(err, FingerprintError::EmptyKeySet(Some(Side::Local)));
}

#[test]
fn conformance_short_key_maps_to_invalid_key_encoding() {
    let err = IdentityKey::from_serialized(&[0x05; 5]).unwrap_err();
    assert_eq!(err.code(), "INVALID_KEY_ENCODING");

    let err = IdentityKey::from_serialized(&[]).unwrap_err();
    assert_eq!(err.code(), "INVALID_KEY_ENCODING");
}

#[test]
fn conformance_simple_variant_bad_buffer_maps_to_invalid_key_encoding() {
    let good = {
        let mut raw = vec![0x05];
        raw.extend_from_slice(&[9u8; 32]);
        raw
    };
    for bad in [vec![], vec![0x05], vec![0x05; 20]] {
        let err = compute_fingerprint_simple(0, "a", &bad, "b", &good).unwrap_err();
        assert_eq!(err.code(), "INVALID_KEY_ENCODING");
        let err = compute_fingerprint_simple(0, "a", &good, "b", &bad).unwrap_err();
        assert_eq!(err.code(), "INVALID_KEY_ENCODING");
    }
}

#[test]
fn conformance_short_digest_maps_to_malformed_digest() {
    let err = safenum_core::chunks::encode_chunks(&[0u8; 12]).unwrap_err();
    assert_eq!(err.code(), "MALFORMED_DIGEST");
}

#[test]
fn conformance_bad_hex_maps_to_encoding_error() {
    let err = safenum_core::encoding::from_hex("abc").unwrap_err();
    assert_eq!(err.code(), "ENCODING_ERROR");
    assert!(err.to_string().starts_with("Encoding error:"));
}
