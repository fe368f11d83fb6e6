//! Identity: serialized identity keys and the parties that hold them.
//!
//! The core never touches curve arithmetic. An identity key is consumed
//! only through its serialized form (`0x05 || 32-byte Curve25519 point`
//! for the DJB scheme), so `IdentityKey` is a validated byte newtype.
//!
//! ## Non-goals
//! - No key generation or persistence.
//! - No point validation (the transport layer owns the curve type).

use std::cmp::Ordering;

use crate::constants::{DJB_KEY_LENGTH, DJB_TYPE, MIN_SERIALIZED_KEY_LENGTH};
use crate::errors::FingerprintError;

/// A public identity key in its serialized byte form.
///
/// Ordering is byte-wise lexicographic over unsigned bytes, which is the
/// order the key canonicalizer sorts by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    serialized: Vec<u8>,
}

impl IdentityKey {
    /// Wrap an already-serialized key.
    ///
    /// # Errors
    /// Returns `FingerprintError::InvalidKeyEncoding` if `serialized` is
    /// shorter than `MIN_SERIALIZED_KEY_LENGTH`.
    pub fn from_serialized(serialized: &[u8]) -> Result<Self, FingerprintError> {
        if serialized.len() < MIN_SERIALIZED_KEY_LENGTH {
            return Err(FingerprintError::InvalidKeyEncoding {
                len: serialized.len(),
                min: MIN_SERIALIZED_KEY_LENGTH,
            });
        }
        Ok(Self {
            serialized: serialized.to_vec(),
        })
    }

    /// Wrap a bare 32-byte Curve25519 point, adding the DJB type byte.
    pub fn from_djb_public_key(point: &[u8; DJB_KEY_LENGTH]) -> Self {
        let mut serialized = Vec::with_capacity(1 + DJB_KEY_LENGTH);
        serialized.push(DJB_TYPE);
        serialized.extend_from_slice(point);
        Self { serialized }
    }

    /// Strip the one-byte type/format prefix from a raw public-key buffer
    /// and re-wrap the remaining point as a DJB key.
    ///
    /// Whatever the prefix byte was, the result serializes with `0x05`.
    ///
    /// # Errors
    /// Returns `FingerprintError::InvalidKeyEncoding` unless `raw` is
    /// exactly one prefix byte followed by a 32-byte point.
    pub fn from_prefixed_public_key(raw: &[u8]) -> Result<Self, FingerprintError> {
        let point: &[u8; DJB_KEY_LENGTH] = raw
            .get(1..)
            .and_then(|rest| rest.try_into().ok())
            .ok_or(FingerprintError::InvalidKeyEncoding {
                len: raw.len(),
                min: MIN_SERIALIZED_KEY_LENGTH,
            })?;
        Ok(Self::from_djb_public_key(point))
    }

    /// Serialized bytes, as fed into the digest.
    pub fn serialize(&self) -> &[u8] {
        &self.serialized
    }

    /// Length of the serialized form.
    pub fn len(&self) -> usize {
        self.serialized.len()
    }

    /// Always `false` for a validated key; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.serialized.is_empty()
    }
}

impl Ord for IdentityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.serialized.as_slice().cmp(other.serialized.as_slice())
    }
}

impl PartialOrd for IdentityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl AsRef<[u8]> for IdentityKey {
    fn as_ref(&self) -> &[u8] {
        &self.serialized
    }
}

impl TryFrom<&[u8]> for IdentityKey {
    type Error = FingerprintError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_serialized(value)
    }
}

/// One side of a fingerprint: a stable identifier and its identity keys.
///
/// Duplicated keys are kept; the canonical blob contains each copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Party {
    /// Opaque identifier bytes (account id, phone number, address...).
    pub stable_id: Vec<u8>,
    /// Identity keys in any order.
    pub keys: Vec<IdentityKey>,
}

impl Party {
    pub fn new(stable_id: impl Into<Vec<u8>>, keys: Vec<IdentityKey>) -> Self {
        Self {
            stable_id: stable_id.into(),
            keys,
        }
    }

    /// A party holding a single identity key.
    pub fn single(stable_id: impl Into<Vec<u8>>, key: IdentityKey) -> Self {
        Self::new(stable_id, vec![key])
    }
}
