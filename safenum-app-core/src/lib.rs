//! safenum app core: runtime shared by native front ends.
//!
//! Owns everything the pure `safenum-core` crate refuses to: reading
//! config files, installing the tracing subscriber, loading trust
//! anchors for the service transport, and running the two fingerprint
//! branches concurrently.

pub mod config;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod trust;

pub use config::AppConfig;
pub use error::AppError;
pub use runtime::compute_fingerprint_concurrent;
pub use trust::{TrustAnchors, TrustSource};
