//! Mining configuration.

use super::error::MineError;

/// Configuration for [`AprioriRunner`](super::AprioriRunner).
///
/// # Defaults
///
/// ```
/// use u_apriori_ga::apriori::AprioriConfig;
///
/// let config = AprioriConfig::default();
/// assert_eq!(config.min_support, 2);
/// assert!(config.generate_rules);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AprioriConfig {
    /// Minimum number of transactions an itemset of size ≥ 2 must occur in.
    pub min_support: usize,

    /// Whether to derive association rules for every level of size ≥ 2.
    pub generate_rules: bool,
}

impl Default for AprioriConfig {
    fn default() -> Self {
        Self {
            min_support: 2,
            generate_rules: true,
        }
    }
}

impl AprioriConfig {
    /// Sets the absolute support threshold.
    pub fn with_min_support(mut self, support: usize) -> Self {
        self.min_support = support;
        self
    }

    /// Enables or disables rule generation.
    pub fn with_rules(mut self, generate: bool) -> Self {
        self.generate_rules = generate;
        self
    }

    /// Validates the configuration.
    ///
    /// A zero threshold would retain every combination of the vocabulary.
    pub fn validate(&self) -> Result<(), MineError> {
        if self.min_support == 0 {
            return Err(MineError::ZeroSupport);
        }
        Ok(())
    }
}
