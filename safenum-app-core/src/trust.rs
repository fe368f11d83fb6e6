//! Trust anchors: root certificates for the service transport.
//!
//! Not part of the fingerprint contract. Transport code receives a
//! `TrustAnchors` value explicitly; there is no process-wide pool.
//!
//! ## Loading policy (fail-open)
//! 1. Start from the embedded service root.
//! 2. If a root CA file is configured and exists, read and parse it.
//! 3. On read or parse failure, log and keep the embedded root.
//!
//! This is the opposite of the fingerprint pipeline, which fails closed.

use std::path::{Path, PathBuf};

use native_tls::{Certificate, TlsConnector, TlsConnectorBuilder};

use crate::error::AppError;

/// PEM of the service's signing certificate, pinned in place of the
/// system roots.
pub const DEFAULT_ROOT_PEM: &str = include_str!("../certs/default-root.pem");

const PEM_BEGIN: &str = "-----BEGIN CERTIFICATE-----";
const PEM_END: &str = "-----END CERTIFICATE-----";

/// Where the active anchors came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrustSource {
    Embedded,
    File(PathBuf),
}

impl std::fmt::Display for TrustSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrustSource::Embedded => f.write_str("embedded"),
            TrustSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Immutable set of root certificates.
#[derive(Clone)]
pub struct TrustAnchors {
    certificates: Vec<Certificate>,
    source: TrustSource,
}

impl std::fmt::Debug for TrustAnchors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustAnchors")
            .field("certificates", &self.certificates.len())
            .field("source", &self.source)
            .finish()
    }
}

/// Split a PEM bundle into its certificate blocks (markers included).
fn pem_blocks(pem: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut rest = pem;
    while let Some(start) = rest.find(PEM_BEGIN) {
        let Some(end) = rest[start..].find(PEM_END) else {
            break;
        };
        let stop = start + end + PEM_END.len();
        blocks.push(&rest[start..stop]);
        rest = &rest[stop..];
    }
    blocks
}

/// Parse every certificate in a PEM bundle.
///
/// # Errors
/// Returns `AppError::Tls` if the bundle holds no certificate or any
/// block fails to parse.
pub fn parse_pem_bundle(pem: &[u8]) -> Result<Vec<Certificate>, AppError> {
    let text = std::str::from_utf8(pem)
        .map_err(|e| AppError::Tls(format!("PEM is not UTF-8: {e}")))?;
    let blocks = pem_blocks(text);
    if blocks.is_empty() {
        return Err(AppError::Tls("Cannot load PEM: no certificates found".into()));
    }
    blocks
        .into_iter()
        .map(|block| {
            Certificate::from_pem(block.as_bytes())
                .map_err(|e| AppError::Tls(format!("Cannot load PEM: {e}")))
        })
        .collect()
}

impl TrustAnchors {
    /// The embedded service root only.
    pub fn embedded() -> Self {
        let certificates = match parse_pem_bundle(DEFAULT_ROOT_PEM.as_bytes()) {
            Ok(certs) => certs,
            Err(err) => {
                tracing::error!(%err, "embedded root certificate failed to parse");
                Vec::new()
            }
        };
        Self {
            certificates,
            source: TrustSource::Embedded,
        }
    }

    /// Load the configured bundle, falling back to the embedded root.
    ///
    /// Never fails: every problem is logged and the embedded anchors are
    /// kept.
    pub fn load(root_ca: Option<&Path>) -> Self {
        let embedded = Self::embedded();
        let Some(path) = root_ca else {
            return embedded;
        };
        if !path.exists() {
            tracing::warn!(path = %path.display(), "configured root CA does not exist, using embedded root");
            return embedded;
        }

        let pem = match std::fs::read(path) {
            Ok(pem) => pem,
            Err(err) => {
                tracing::error!(path = %path.display(), %err, "failed to read root CA");
                return embedded;
            }
        };
        match parse_pem_bundle(&pem) {
            Ok(certificates) => {
                tracing::info!(path = %path.display(), count = certificates.len(), "loaded root CA bundle");
                Self {
                    certificates,
                    source: TrustSource::File(path.to_path_buf()),
                }
            }
            Err(err) => {
                tracing::error!(path = %path.display(), %err, "failed to parse root CA");
                embedded
            }
        }
    }

    pub fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    pub fn source(&self) -> &TrustSource {
        &self.source
    }

    /// Pin these anchors on a connector builder, replacing system roots.
    pub fn configure<'a>(&self, builder: &'a mut TlsConnectorBuilder) -> &'a mut TlsConnectorBuilder {
        builder.disable_built_in_roots(true);
        for cert in &self.certificates {
            builder.add_root_certificate(cert.clone());
        }
        builder
    }

    /// Build a TLS connector trusting only these anchors.
    pub fn connector(&self) -> Result<TlsConnector, AppError> {
        let mut builder = TlsConnector::builder();
        self.configure(&mut builder);
        builder.build().map_err(|e| AppError::Tls(e.to_string()))
    }
}
