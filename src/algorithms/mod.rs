// ============================================================================
// Algorithms Module
// Generic algorithms written once against the numeric contract
// ============================================================================

pub mod config;
mod parallel;
mod sum;

pub use config::SummationConfig;
pub use parallel::parallel_sum;
pub use sum::{sum, sum_as};
