//! Tracing setup for host applications

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install a global subscriber. `RUST_LOG` wins over the configured level.
///
/// Call once at startup; a second call panics. Use [`try_init_tracing`]
/// when a subscriber may already be installed.
pub fn init_tracing(config: &LoggingConfig) {
    if let Err(e) = try_init_tracing(config) {
        panic!("Failed to install tracing subscriber: {}", e);
    }
}

/// Like [`init_tracing`], but returns an error when a global subscriber is
/// already set.
pub fn try_init_tracing(config: &LoggingConfig) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    if config.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    }
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

// ── Tests ──────────────────────────────────────────────────────
