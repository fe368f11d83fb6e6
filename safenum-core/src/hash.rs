//! Iterative digest: SHA-512 chained `ITERATIONS` times per party.
//!
//! ## Algorithm
//! ```text
//! seed   = be16(FINGERPRINT_VERSION) || blob || stable_id
//! h_0    = seed
//! h_i+1  = SHA-512(h_i || blob)          (fresh hasher each round)
//! digest = h_ITERATIONS                   (64 bytes)
//! ```
//! The per-round feed is the running value followed by the canonical
//! key blob, NOT the stable identifier. Every deployed peer hashes it
//! this way.

use sha2::{Digest, Sha512};

use crate::canonical::CanonicalKeyBlob;
use crate::constants::{FINGERPRINT_VERSION, HASH_OUTPUT_LENGTH, VERSION_FIELD_LENGTH};

/// 64-byte digest for one party.
pub type PartyDigest = [u8; HASH_OUTPUT_LENGTH];

/// Build the round-0 input: version field, key blob, stable identifier.
pub fn digest_seed(stable_id: &[u8], blob: &CanonicalKeyBlob) -> Vec<u8> {
    let mut seed = Vec::with_capacity(VERSION_FIELD_LENGTH + blob.len() + stable_id.len());
    seed.extend_from_slice(&FINGERPRINT_VERSION.to_be_bytes());
    seed.extend_from_slice(blob.as_bytes());
    seed.extend_from_slice(stable_id);
    seed
}

/// Derive one party's digest.
///
/// `_version` is accepted for API compatibility and ignored: the seed
/// always carries `FINGERPRINT_VERSION`. At least one round always runs,
/// so an `iterations` of 0 behaves like 1.
pub fn derive_party_digest(
    _version: i16,
    stable_id: &[u8],
    blob: &CanonicalKeyBlob,
    iterations: usize,
) -> PartyDigest {
    let seed = digest_seed(stable_id, blob);
    let mut hasher = Sha512::new();
    let mut running = [0u8; HASH_OUTPUT_LENGTH];

    hasher.update(&seed);
    hasher.update(blob.as_bytes());
    running.copy_from_slice(&hasher.finalize_reset());

    for _ in 1..iterations {
        hasher.update(running);
        hasher.update(blob.as_bytes());
        running.copy_from_slice(&hasher.finalize_reset());
    }
    running
}

/// Compute SHA-512 of arbitrary data.
pub fn sha512(data: &[u8]) -> PartyDigest {
    let mut out = [0u8; HASH_OUTPUT_LENGTH];
    out.copy_from_slice(&Sha512::digest(data));
    out
}
