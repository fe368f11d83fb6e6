//! Numeric fingerprint ("safety number") computation.
//!
//! CANONICAL: `compute_fingerprint()` is the single entry point front
//! ends use. Everything else in this crate is a stage it composes.
//!
//! ## Pipeline (per party, then joined)
//! ```text
//! blob    = canonicalize(keys)
//! digest  = derive_party_digest(version, stable_id, blob, ITERATIONS)
//! chunks  = encode_chunks(digest)
//! display = order(local_chunks, remote_chunks)     (12 blocks)
//! ```
//!
//! ## Parity gates
//! - libsignal reference vector (`+14152222222` / `+14153333333`).
//! - Symmetric: swapping local and remote never changes the result.
//! - Key order within a party never changes the result.

use std::fmt;
use std::str::FromStr;

use crate::canonical::{canonicalize, CanonicalKeyBlob};
use crate::chunks::{encode_chunks, ChunkSequence};
use crate::constants::{CHUNKS_PER_PARTY, DIGITS_PER_BLOCK, ITERATIONS, TOTAL_BLOCKS};
use crate::display::order;
use crate::errors::{FingerprintError, Side};
use crate::hash::derive_party_digest;
use crate::identity::{IdentityKey, Party};

/// The 12 displayed blocks, already in canonical order.
///
/// `Display` renders the 60-digit string; `rows()` gives the usual two
/// rows of six.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    blocks: Vec<String>,
}

impl Fingerprint {
    /// Only `display::order` builds fingerprints from encoder output,
    /// which always yields `TOTAL_BLOCKS` blocks.
    pub(crate) fn from_blocks_unchecked(blocks: Vec<String>) -> Self {
        debug_assert_eq!(blocks.len(), TOTAL_BLOCKS);
        Self { blocks }
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<String> {
        self.blocks
    }

    /// First and second row of six blocks.
    pub fn rows(&self) -> (&[String], &[String]) {
        self.blocks.split_at(CHUNKS_PER_PARTY)
    }

    /// Two lines of six space-separated blocks.
    pub fn to_rows_string(&self) -> String {
        let (top, bottom) = self.rows();
        format!("{}\n{}", top.join(" "), bottom.join(" "))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            f.write_str(block)?;
        }
        Ok(())
    }
}

/// Parse a number typed or read back by a user.
///
/// ASCII whitespace anywhere is ignored, so `"30035 44776 …"`, two rows,
/// and the bare 60-digit string all parse to the same value.
impl FromStr for Fingerprint {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        if digits.len() != TOTAL_BLOCKS * DIGITS_PER_BLOCK {
            return Err(FingerprintError::Encoding(format!(
                "fingerprint must have {} digits, got {}",
                TOTAL_BLOCKS * DIGITS_PER_BLOCK,
                digits.len()
            )));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FingerprintError::Encoding(
                "fingerprint contains non-digit characters".into(),
            ));
        }
        let blocks = digits
            .as_bytes()
            .chunks(DIGITS_PER_BLOCK)
            .map(|c| String::from_utf8_lossy(c).into_owned())
            .collect();
        Ok(Self { blocks })
    }
}

/// Digest one canonicalized party and encode its six blocks.
pub fn party_chunks(
    version: i16,
    stable_id: &[u8],
    blob: &CanonicalKeyBlob,
) -> Result<ChunkSequence, FingerprintError> {
    let digest = derive_party_digest(version, stable_id, blob, ITERATIONS);
    encode_chunks(&digest)
}

/// Canonicalize both parties' keys, tagging failures with their side.
///
/// Runs before any hashing so an invalid remote set never costs a
/// local digest.
pub fn canonicalize_pair(
    local_keys: &[IdentityKey],
    remote_keys: &[IdentityKey],
) -> Result<(CanonicalKeyBlob, CanonicalKeyBlob), FingerprintError> {
    let local = canonicalize(local_keys).map_err(|e| e.with_side(Side::Local))?;
    let remote = canonicalize(remote_keys).map_err(|e| e.with_side(Side::Remote))?;
    Ok((local, remote))
}

/// Compute the 12-block fingerprint for two parties.
///
/// `version` is accepted for compatibility and does not affect the
/// result (see `constants::FINGERPRINT_VERSION`).
///
/// # Errors
/// - `FingerprintError::EmptyKeySet` if either key set is empty.
/// - `FingerprintError::InvalidKeyEncoding` for an undersized key.
pub fn compute_fingerprint(
    version: i16,
    local_stable_id: &[u8],
    local_keys: &[IdentityKey],
    remote_stable_id: &[u8],
    remote_keys: &[IdentityKey],
) -> Result<Fingerprint, FingerprintError> {
    let (local_blob, remote_blob) = canonicalize_pair(local_keys, remote_keys)?;
    let local = party_chunks(version, local_stable_id, &local_blob)?;
    let remote = party_chunks(version, remote_stable_id, &remote_blob)?;
    Ok(order(local, remote))
}

/// `compute_fingerprint` over two `Party` values.
pub fn compute_party_fingerprint(
    version: i16,
    local: &Party,
    remote: &Party,
) -> Result<Fingerprint, FingerprintError> {
    compute_fingerprint(
        version,
        &local.stable_id,
        &local.keys,
        &remote.stable_id,
        &remote.keys,
    )
}

/// Convenience variant: string identifiers and one raw public key per
/// party, each carrying a one-byte type prefix that is stripped.
///
/// # Errors
/// `FingerprintError::InvalidKeyEncoding` unless each key buffer is one
/// prefix byte plus a 32-byte point.
pub fn compute_fingerprint_simple(
    version: i16,
    local: &str,
    local_key: &[u8],
    remote: &str,
    remote_key: &[u8],
) -> Result<Fingerprint, FingerprintError> {
    let local_key = IdentityKey::from_prefixed_public_key(local_key)?;
    let remote_key = IdentityKey::from_prefixed_public_key(remote_key)?;
    compute_fingerprint(
        version,
        local.as_bytes(),
        &[local_key],
        remote.as_bytes(),
        &[remote_key],
    )
}
