//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Install a JSON fmt subscriber.
///
/// `RUST_LOG` wins over `default_directive` when set. Safe to call multiple
/// times (subsequent calls are no-ops).
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn repeated_init_is_a_noop() {
        super::init("debug");
        assert!(::tracing::dispatcher::has_been_set());

        super::init("warn");
        assert!(::tracing::dispatcher::has_been_set());
    }
}
