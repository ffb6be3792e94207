//! Structured logging initialization, CLI-only.
//!
//! Library code (`lib.rs` and everything under it) never installs a global
//! subscriber — a caller embedding the gate owns that decision. Only the
//! `csg` binary calls [`init`].

use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Installs a `tracing_subscriber` writing to stderr, filtered by `RUST_LOG`
/// and defaulting to `warn`. Safe to call more than once; only the first
/// call takes effect.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_target(true).compact())
            .with(filter)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }
}
