//! Encoding utilities: base64 and hex.
//!
//! Identity keys travel between clients as standard base64 (RFC 4648,
//! with padding); test vectors and logs use lowercase hex. Both are
//! decoded here so callers only ever hand raw bytes to the pipeline.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::errors::FingerprintError;

/// Encode bytes to standard base64 (RFC 4648, with padding).
pub fn to_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode standard base64 to bytes.
///
/// # Errors
/// Returns `FingerprintError::Encoding` on invalid base64 input.
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, FingerprintError> {
    STANDARD
        .decode(encoded.trim())
        .map_err(|e| FingerprintError::Encoding(format!("invalid base64: {e}")))
}

/// Encode bytes to lowercase hex string.
pub fn to_hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decode hex string to bytes.
///
/// # Errors
/// Returns `FingerprintError::Encoding` on invalid hex input.
pub fn from_hex(encoded: &str) -> Result<Vec<u8>, FingerprintError> {
    if !encoded.len().is_multiple_of(2) {
        return Err(FingerprintError::Encoding("odd-length hex string".into()));
    }
    if !encoded.is_ascii() {
        return Err(FingerprintError::Encoding("non-ascii hex string".into()));
    }
    (0..encoded.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&encoded[i..i + 2], 16)
                .map_err(|e| FingerprintError::Encoding(format!("invalid hex: {e}")))
        })
        .collect()
}
