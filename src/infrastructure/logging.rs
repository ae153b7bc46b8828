//! Logging configuration
//!
//! Initializes tracing for the binary. `RUST_LOG` wins over the default
//! level so CI jobs can turn on request-level detail without a rebuild.

/// Initializes logging with the specified fallback level.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging("debug");
        init_logging("warn");
    }
}
