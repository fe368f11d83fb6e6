//! Deterministic golden vector generator.
//!
//! Regenerates `vectors/fingerprint.vectors.json` from fixed inputs so
//! the committed file can be diffed against what this crate computes.
//! Other implementations consume the same file.
//!
//! Requires the `vectors` feature.

use serde::{Deserialize, Serialize};

use crate::constants::{DJB_TYPE, ITERATIONS};
use crate::encoding::{from_hex, to_hex};
use crate::errors::FingerprintError;
use crate::fingerprint::compute_fingerprint;
use crate::identity::IdentityKey;

/// Top-level vector file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintVectors {
    #[serde(rename = "_WARNING")]
    pub warning: String,
    pub description: String,
    pub version: u32,
    pub iterations: usize,
    pub cases: Vec<FingerprintCase>,
}

/// One input/output pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintCase {
    pub name: String,
    pub local_stable_id: String,
    pub local_keys_hex: Vec<String>,
    pub remote_stable_id: String,
    pub remote_keys_hex: Vec<String>,
    pub expected_fingerprint: String,
}

impl FingerprintCase {
    /// Decode both parties' keys.
    pub fn keys(&self) -> Result<(Vec<IdentityKey>, Vec<IdentityKey>), FingerprintError> {
        Ok((decode_keys(&self.local_keys_hex)?, decode_keys(&self.remote_keys_hex)?))
    }
}

fn decode_keys(hex: &[String]) -> Result<Vec<IdentityKey>, FingerprintError> {
    hex.iter()
        .map(|h| IdentityKey::from_serialized(&from_hex(h)?))
        .collect()
}

const ALICE_IDENTITY: &str = "0506863bc66d02b40d27b8d49ca7c09e9239236f9d7d25d6fcca5ce13c7064d868";
const BOB_IDENTITY: &str = "05f781b6fb32fed9ba1cf2de978d4d5da28dc34046ae814402b5c0dbd96fda907b";

/// `0x05 || [fill; 32]`, hex-encoded.
fn filled_key_hex(fill: u8) -> String {
    let mut bytes = vec![DJB_TYPE];
    bytes.extend_from_slice(&[fill; 32]);
    to_hex(&bytes)
}

/// `0x05 || [0x00, 0x01, ..., 0x1f]` offset by `start`, hex-encoded.
fn counting_key_hex(start: u8) -> String {
    let mut bytes = vec![DJB_TYPE];
    bytes.extend((0u8..32).map(|i| i.wrapping_add(start)));
    to_hex(&bytes)
}

/// (name, local id, local keys, remote id, remote keys)
fn case_inputs() -> Vec<(&'static str, String, Vec<String>, String, Vec<String>)> {
    vec![
        (
            "libsignal-reference",
            "+14152222222".into(),
            vec![ALICE_IDENTITY.into()],
            "+14153333333".into(),
            vec![BOB_IDENTITY.into()],
        ),
        (
            "alice-bob-filled-keys",
            "alice".into(),
            vec![filled_key_hex(0x11)],
            "bob".into(),
            vec![filled_key_hex(0xee)],
        ),
        (
            "multi-device-local",
            "alice".into(),
            vec![filled_key_hex(0x80), counting_key_hex(0), filled_key_hex(0x01)],
            "bob".into(),
            vec![BOB_IDENTITY.into()],
        ),
        (
            "multi-device-both-with-duplicate",
            "alice@example.org".into(),
            vec![counting_key_hex(0x40), counting_key_hex(0x40)],
            "bob@example.org".into(),
            vec![ALICE_IDENTITY.into(), BOB_IDENTITY.into()],
        ),
        (
            "identical-parties",
            "alice".into(),
            vec![ALICE_IDENTITY.into()],
            "alice".into(),
            vec![ALICE_IDENTITY.into()],
        ),
        (
            "non-ascii-identifiers",
            "ålice".into(),
            vec![counting_key_hex(0xa0)],
            "bøb".into(),
            vec![filled_key_hex(0xff)],
        ),
    ]
}

/// Build the vector set by computing every case.
pub fn generate_fingerprint_vectors() -> Result<FingerprintVectors, FingerprintError> {
    let mut cases = Vec::new();
    for (name, local_id, local_hex, remote_id, remote_hex) in case_inputs() {
        let local_keys = decode_keys(&local_hex)?;
        let remote_keys = decode_keys(&remote_hex)?;
        let fingerprint = compute_fingerprint(
            0,
            local_id.as_bytes(),
            &local_keys,
            remote_id.as_bytes(),
            &remote_keys,
        )?;
        cases.push(FingerprintCase {
            name: name.into(),
            local_stable_id: local_id,
            local_keys_hex: local_hex,
            remote_stable_id: remote_id,
            remote_keys_hex: remote_hex,
            expected_fingerprint: fingerprint.to_string(),
        });
    }
    Ok(FingerprintVectors {
        warning: "TEST VECTORS ONLY. These keys are public; never use them outside tests.".into(),
        description: "Numeric fingerprint golden vectors: stable ids are UTF-8, keys are \
                      serialized identity keys (hex), expected_fingerprint is the 60-digit display string."
            .into(),
        version: 1,
        iterations: ITERATIONS,
        cases,
    })
}

/// Pretty-printed JSON for `vectors/fingerprint.vectors.json`.
pub fn generate_fingerprint_json() -> Result<String, FingerprintError> {
    let vectors = generate_fingerprint_vectors()?;
    serde_json::to_string_pretty(&vectors)
        .map_err(|e| FingerprintError::Encoding(format!("vector serialization failed: {e}")))
}
