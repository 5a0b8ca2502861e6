//! Configuration shared by all binners

use serde::{Deserialize, Serialize};

use crate::keys::KeyStrategy;

/// Settings for a binner instance
///
/// # Example
///
/// ```rust
/// use binstats_core::{BinningConfig, KeyStrategy};
///
/// let config = BinningConfig::default().with_key_strategy(KeyStrategy::Ordinal);
/// assert_eq!(config.key_strategy, KeyStrategy::Ordinal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BinningConfig {
    /// How exported results are keyed, and whether preload can derive bins
    pub key_strategy: KeyStrategy,
}

impl BinningConfig {
    /// Create a configuration with the given key strategy
    pub fn new(key_strategy: KeyStrategy) -> Self {
        Self { key_strategy }
    }

    /// Replace the key strategy
    pub fn with_key_strategy(mut self, key_strategy: KeyStrategy) -> Self {
        self.key_strategy = key_strategy;
        self
    }
}
