//! Chunk encoding: six 5-digit decimal blocks per party digest.
//!
//! ## Algorithm
//! ```text
//! for offset in [0, 5, 10, 15, 20, 25]:
//!     n     = be40(digest[offset..offset + 5])
//!     block = format("{:05}", n % 100000)
//! ```

use crate::constants::{
    CHUNKS_PER_PARTY, CHUNK_MODULUS, CHUNK_WINDOW_LENGTH, DIGITS_PER_BLOCK, MIN_DIGEST_LENGTH,
};
use crate::errors::FingerprintError;

/// One party's displayed blocks, in digest order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChunkSequence(Vec<String>);

impl ChunkSequence {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

/// Read a 40-bit big-endian integer at `offset`.
///
/// Callers guarantee `offset + 5 <= bytes.len()`.
fn read_u40_be(bytes: &[u8], offset: usize) -> u64 {
    bytes[offset..offset + CHUNK_WINDOW_LENGTH]
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Encode the 5-byte window at `offset` as a zero-padded block.
fn encoded_chunk(digest: &[u8], offset: usize) -> String {
    let value = read_u40_be(digest, offset) % CHUNK_MODULUS;
    format!("{value:0width$}", width = DIGITS_PER_BLOCK)
}

/// Encode a party digest into its six display blocks.
///
/// # Errors
/// Returns `FingerprintError::MalformedDigest` if `digest` is shorter
/// than `MIN_DIGEST_LENGTH` (30) bytes. Digests produced by
/// `hash::derive_party_digest` are always 64 bytes.
pub fn encode_chunks(digest: &[u8]) -> Result<ChunkSequence, FingerprintError> {
    if digest.len() < MIN_DIGEST_LENGTH {
        return Err(FingerprintError::MalformedDigest {
            len: digest.len(),
            min: MIN_DIGEST_LENGTH,
        });
    }
    let chunks = (0..CHUNKS_PER_PARTY)
        .map(|i| encoded_chunk(digest, i * CHUNK_WINDOW_LENGTH))
        .collect();
    Ok(ChunkSequence(chunks))
}
