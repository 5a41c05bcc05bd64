//! Tracing setup

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise `budget_buddy=<default_level>`.
/// Only the first call has any effect.
pub fn init_tracing(default_level: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(format!("budget_buddy={}", default_level)))
            .unwrap_or_else(|_| EnvFilter::new("budget_buddy=warn"));

        // a subscriber installed by the host process takes precedence
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_repeatable() {
        init_tracing("debug");
        init_tracing("not a level");
        tracing::debug!("still works");
    }
}
