//! Error types for safenum-core.
//!
//! Every failure aborts the whole computation. There is no partial or
//! placeholder fingerprint: a caller holding an `Err` has nothing to
//! display.

/// Unified error type for all safenum-core operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FingerprintError {
    /// A serialized identity key is empty or shorter than the scheme minimum.
    #[error("Invalid key encoding: {len} bytes, expected at least {min}")]
    InvalidKeyEncoding {
        /// Length of the offending serialization.
        len: usize,
        /// Minimum accepted length.
        min: usize,
    },

    /// A party supplied no identity keys. The side is filled in once the
    /// failing branch is known.
    #[error(
        "Empty key set{}",
        .0.map(|side| format!(" for {side} party")).unwrap_or_default()
    )]
    EmptyKeySet(Option<Side>),

    /// Digest too short to slice six chunk windows from.
    #[error("Malformed digest: {len} bytes, expected at least {min}")]
    MalformedDigest {
        /// Length of the digest handed to the chunk encoder.
        len: usize,
        /// Minimum accepted length.
        min: usize,
    },

    /// Encoding error (hex, base64, fingerprint text).
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Which side of the comparison an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Local,
    Remote,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Local => f.write_str("local"),
            Side::Remote => f.write_str("remote"),
        }
    }
}

// ── Error Code Registry ─────────────────────────────────────────────

/// Stable machine-readable codes, one per `FingerprintError` variant.
///
/// Front ends map on these rather than on display strings, which may
/// carry lengths and party names.
pub const ERROR_CODES: [&str; 4] = [
    "INVALID_KEY_ENCODING",
    "EMPTY_KEY_SET",
    "MALFORMED_DIGEST",
    "ENCODING_ERROR",
];

impl FingerprintError {
    /// Attach the failing side to an `EmptyKeySet` that does not carry one yet.
    pub fn with_side(self, side: Side) -> Self {
        match self {
            FingerprintError::EmptyKeySet(None) => FingerprintError::EmptyKeySet(Some(side)),
            other => other,
        }
    }

    /// Registry code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            FingerprintError::InvalidKeyEncoding { .. } => ERROR_CODES[0],
            FingerprintError::EmptyKeySet(_) => ERROR_CODES[1],
            FingerprintError::MalformedDigest { .. } => ERROR_CODES[2],
            FingerprintError::Encoding(_) => ERROR_CODES[3],
        }
    }
}

/// Returns `true` if the given string is a registered error code.
pub fn is_valid_error_code(code: &str) -> bool {
    ERROR_CODES.contains(&code)
}
