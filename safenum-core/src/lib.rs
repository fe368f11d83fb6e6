//! safenum core: canonical numeric fingerprint ("safety number").
//!
//! This crate is the single source of truth for the safety-number
//! pipeline. Every interoperating client (libsignal Java/Swift/JS and
//! this crate) MUST derive the same 60 digits from the same keys,
//! verified by the shared golden vectors in `vectors/`.
//!
//! # Module Map
//!
//! | Module | Stage | Status |
//! |--------|-------|--------|
//! | [`constants`] | interop constants | Complete |
//! | [`errors`] | error type + code registry | Complete |
//! | [`encoding`] | hex / base64 | Complete |
//! | [`identity`] | serialized identity keys, parties | Complete |
//! | [`canonical`] | KeyCanonicalizer | Complete |
//! | [`hash`] | IterativeDigest (SHA-512 × 5200) | Complete |
//! | [`chunks`] | ChunkEncoder | Complete |
//! | [`display`] | DisplayOrderer | Complete |
//! | [`fingerprint`] | public entry points | Complete |
//! | [`vectors`] | golden vector generator | Complete (test-only) |
//!
//! The crate is pure: no IO, no logging, no global state. Concurrency
//! and cancellation live in `safenum-app-core`.

/// Fingerprint constants: the interop contract.
pub mod constants;

/// Error types for safenum-core operations.
pub mod errors;

/// Encoding utilities: base64 and hex.
pub mod encoding;

/// Identity keys and parties.
pub mod identity;

/// Key canonicalization.
pub mod canonical;

/// Iterative SHA-512 digest.
pub mod hash;

/// Chunk encoding into 5-digit blocks.
pub mod chunks;

/// Two-party display ordering.
pub mod display;

/// Fingerprint computation entry points.
pub mod fingerprint;

/// Deterministic golden vector generator (test use only).
/// Requires the `vectors` feature: `cargo test --features vectors`.
#[cfg(feature = "vectors")]
pub mod vectors;

pub use errors::{FingerprintError, Side};
pub use fingerprint::{
    compute_fingerprint, compute_fingerprint_simple, compute_party_fingerprint, Fingerprint,
};
pub use identity::{IdentityKey, Party};
