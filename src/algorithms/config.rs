// ============================================================================
// Summation Configuration
// Partitioning parameters for parallel summation
// ============================================================================

use std::num::NonZeroUsize;
use std::thread;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default input length below which parallel summation stays sequential
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4_096;

/// Controls how [`parallel_sum`](super::parallel_sum) splits its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SummationConfig {
    /// Number of partitions (and worker threads) to reduce concurrently
    pub partitions: usize,

    /// Inputs shorter than this are summed on the calling thread
    pub parallel_threshold: usize,
}

impl Default for SummationConfig {
    fn default() -> Self {
        Self::from_available_parallelism()
    }
}

impl SummationConfig {
    /// Create a new configuration
    pub fn new(partitions: usize, parallel_threshold: usize) -> Self {
        Self {
            partitions,
            parallel_threshold,
        }
    }

    /// Builder method: Set number of partitions
    pub fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions;
        self
    }

    /// Builder method: Set the sequential cut-over length
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.partitions == 0 {
            return Err("Partition count must be at least 1".to_string());
        }

        if self.parallel_threshold == 0 {
            return Err("Parallel threshold must be at least 1".to_string());
        }

        Ok(())
    }

    /// Whether an input of `len` elements should be split.
    pub fn should_partition(&self, len: usize) -> bool {
        self.partitions > 1 && len >= self.parallel_threshold
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Always sum on the calling thread
    pub fn sequential() -> Self {
        Self::new(1, usize::MAX)
    }

    /// One partition per available hardware thread
    pub fn from_available_parallelism() -> Self {
        let partitions = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        Self::new(partitions, DEFAULT_PARALLEL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = SummationConfig::new(4, 100);
        assert_eq!(config.partitions, 4);
        assert_eq!(config.parallel_threshold, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SummationConfig::sequential()
            .with_partitions(8)
            .with_parallel_threshold(16);

        assert_eq!(config.partitions, 8);
        assert_eq!(config.parallel_threshold, 16);
    }

    #[test]
    fn test_validation() {
        assert!(SummationConfig::new(0, 10).validate().is_err());
        assert!(SummationConfig::new(2, 0).validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        let sequential = SummationConfig::sequential();
        assert!(!sequential.should_partition(1_000_000));

        let default = SummationConfig::default();
        assert!(default.partitions >= 1);
        assert!(default.validate().is_ok());

        let small = SummationConfig::new(4, 10);
        assert!(!small.should_partition(9));
        assert!(small.should_partition(10));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = SummationConfig::new(3, 64);
        let json = serde_json::to_string(&config).unwrap();
        let back: SummationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
