// ============================================================================
// Utilities Module
// Ambient helpers that are not part of the numeric core
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_tracing;
