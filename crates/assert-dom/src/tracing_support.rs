//! Log output for test runs.

use tracing_subscriber::EnvFilter;

/// Route assertion logs to the test harness output.
///
/// Honours `RUST_LOG` and falls back to `warn`. Safe to call from every test;
/// only the first call installs a subscriber.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_test_tracing();
        init_test_tracing();
        tracing::debug!("still usable after repeated init");
    }
}
