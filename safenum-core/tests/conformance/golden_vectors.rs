//! Conformance: Golden Vector Match
//!
//! Every case in `vectors/fingerprint.vectors.json` produces its
//! expected 60 digits, in both local/remote orientations.

use std::path::PathBuf;

use safenum_core::compute_fingerprint;
use safenum_core::vectors::FingerprintVectors;

fn vectors_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("vectors")
}

fn load_vectors() -> FingerprintVectors {
    let path = vectors_dir().join("fingerprint.vectors.json");
    let data = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&data).expect("fingerprint vectors parse failed")
}

#[test]
fn conformance_golden_vectors_match() {
    let vecs = load_vectors();
    assert_eq!(vecs.version, 1, "unexpected vector schema version");
    assert!(
        vecs.cases.len() >= 3,
        "expected at least 3 cases, got {}",
        vecs.cases.len()
    );

    for case in &vecs.cases {
        let (local, remote) = case.keys().expect("case keys");
        let fp = compute_fingerprint(
            0,
            case.local_stable_id.as_bytes(),
            &local,
            case.remote_stable_id.as_bytes(),
            &remote,
        )
        .unwrap();
        assert_eq!(
            fp.to_string(),
            case.expected_fingerprint,
            "fingerprint mismatch for case '{}'",
            case.name
        );
    }
}

#[test]
fn conformance_golden_vectors_symmetric() {
    for case in &load_vectors().cases {
        let (local, remote) = case.keys().expect("case keys");
        let swapped = compute_fingerprint(
            0,
            case.remote_stable_id.as_bytes(),
            &remote,
            case.local_stable_id.as_bytes(),
            &local,
        )
        .unwrap();
        assert_eq!(
            swapped.to_string(),
            case.expected_fingerprint,
            "swapped orientation mismatch for case '{}'",
            case.name
        );
    }
}

#[test]
fn conformance_distinct_inputs_produce_distinct_outputs() {
    let vecs = load_vectors();
    let unique: std::collections::HashSet<_> =
        vecs.cases.iter().map(|c| &c.expected_fingerprint).collect();
    assert_eq!(unique.len(), vecs.cases.len(), "fingerprint collision among cases");
}
