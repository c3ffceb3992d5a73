// ============================================================================
// Logging Setup
// Optional tracing subscriber for binaries and tests embedding the crate
// ============================================================================
//
// The library only emits `tracing` events:
// - trace: a numeral conversion rejected its source value
// - debug: a summation aborted, or parallel summation partitioned its input
//
// With the `logging` feature enabled, `init_tracing` installs a formatting
// subscriber that prints those events to stderr.

use tracing::Level;

/// Install a global formatting subscriber at `level`.
///
/// # Errors
/// Returns a description of the failure if a global subscriber is already
/// installed.
pub fn init_tracing(level: Level) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("Failed to install tracing subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::sum;
    use crate::numeric::Numeral;

    #[test]
    fn test_second_init_reports_error() {
        // Another test may have installed the subscriber first
        let _ = init_tracing(Level::TRACE);
        assert!(init_tracing(Level::DEBUG).is_err());

        // Events still flow through the installed subscriber
        assert!(sum([Numeral::MAX, Numeral::ONE]).is_err());
    }
}
