//! Tracing bootstrap shared by every front end.

use tracing_subscriber::{
    filter::{Directive, LevelFilter},
    prelude::__tracing_subscriber_SubscriberExt as _,
    util::SubscriberInitExt as _,
    EnvFilter,
};

/// Install a stderr `fmt` subscriber.
///
/// The filter hierarchy is:
///    - `RUST_LOG`, if set, overrides matching targets
///    - otherwise `default_directive` (from config / `SAFENUM_LOG`)
///
/// Returns `false` if a global subscriber was already installed; the
/// existing one is kept.
pub fn init_tracing(default_directive: &str) -> bool {
    let filter = EnvFilter::builder()
        .with_default_directive(
            default_directive
                .parse::<Directive>()
                .unwrap_or_else(|_| LevelFilter::INFO.into()),
        )
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .is_ok()
}
