//! Tracing setup.
//!
//! `RUST_LOG` wins when set; otherwise the filter from the settings file is used.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter used by [`init`].
pub fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(fallback: &str) {
    let result = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(build_filter(fallback))
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init("participants_pane=debug");
        init("participants_pane=debug");
    }
}
