//! Fingerprint constants: the interop contract.
//!
//! Every constant here MUST exactly match the values used by every
//! interoperating safety-number implementation (libsignal Java, Swift,
//! JavaScript and Rust). Changing any of them silently produces a
//! different number on one side only.

/// Number of chained SHA-512 rounds per party.
pub const ITERATIONS: usize = 5200;

/// Version tag written into the digest seed.
///
/// The public operations accept a `version` argument but the seed is
/// always built from this constant, as deployed peers do.
pub const FINGERPRINT_VERSION: i16 = 0;

/// Width of the big-endian version field at the start of the seed.
pub const VERSION_FIELD_LENGTH: usize = 2;

/// SHA-512 output length in bytes.
pub const HASH_OUTPUT_LENGTH: usize = 64;

/// Bytes consumed per displayed block.
pub const CHUNK_WINDOW_LENGTH: usize = 5;

/// Displayed blocks derived from one party's digest.
pub const CHUNKS_PER_PARTY: usize = 6;

/// Blocks in a complete fingerprint (both parties).
pub const TOTAL_BLOCKS: usize = 2 * CHUNKS_PER_PARTY;

/// Digits per displayed block.
pub const DIGITS_PER_BLOCK: usize = 5;

/// Each 40-bit window is reduced modulo this value.
pub const CHUNK_MODULUS: u64 = 100_000;

/// Minimum digest length the chunk encoder accepts.
pub const MIN_DIGEST_LENGTH: usize = CHUNKS_PER_PARTY * CHUNK_WINDOW_LENGTH;

/// Type byte prefixed to a serialized Curve25519 (DJB) public key.
pub const DJB_TYPE: u8 = 0x05;

/// Curve25519 public key length without the type byte.
pub const DJB_KEY_LENGTH: usize = 32;

/// Shortest serialized identity key accepted: type byte + point.
pub const MIN_SERIALIZED_KEY_LENGTH: usize = 1 + DJB_KEY_LENGTH;
