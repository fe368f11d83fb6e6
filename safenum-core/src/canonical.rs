//! Key canonicalization: order-independent key blob.
//!
//! ## Algorithm
//! ```text
//! blob = concat(sort_bytewise(serialize(k) for k in keys))
//! ```
//! The sort is stable, so equal serializations keep their relative order
//! (which cannot be observed in the output anyway). Duplicates are kept.

use crate::constants::MIN_SERIALIZED_KEY_LENGTH;
use crate::errors::FingerprintError;
use crate::identity::IdentityKey;

/// Ordered concatenation of one party's serialized identity keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalKeyBlob(Vec<u8>);

impl CanonicalKeyBlob {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalKeyBlob {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Return the keys in canonical (ascending byte-wise) order.
pub fn sort_identity_keys(keys: &[IdentityKey]) -> Vec<&IdentityKey> {
    let mut sorted: Vec<&IdentityKey> = keys.iter().collect();
    sorted.sort();
    sorted
}

/// Build the canonical key blob for one party.
///
/// # Errors
/// - `FingerprintError::EmptyKeySet` (without a side) if `keys` is empty.
/// - `FingerprintError::InvalidKeyEncoding` if any serialization is
///   shorter than `MIN_SERIALIZED_KEY_LENGTH`.
pub fn canonicalize(keys: &[IdentityKey]) -> Result<CanonicalKeyBlob, FingerprintError> {
    if keys.is_empty() {
        return Err(FingerprintError::EmptyKeySet(None));
    }
    // IdentityKey validates on construction; this guards keys built
    // through future constructors that skip the length check.
    if let Some(bad) = keys.iter().find(|k| k.len() < MIN_SERIALIZED_KEY_LENGTH) {
        return Err(FingerprintError::InvalidKeyEncoding {
            len: bad.len(),
            min: MIN_SERIALIZED_KEY_LENGTH,
        });
    }

    let sorted = sort_identity_keys(keys);
    let mut blob = Vec::with_capacity(sorted.iter().map(|k| k.len()).sum());
    for key in sorted {
        blob.extend_from_slice(key.serialize());
    }
    Ok(CanonicalKeyBlob(blob))
}
