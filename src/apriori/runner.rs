//! Level-wise mining loop.

use super::config::AprioriConfig;
use super::error::MineError;
use super::miner::Apriori;
use super::transactions::TransactionSet;
use super::types::{AssociationRule, ItemSetKind, ItemSetTable};
use tracing::{debug, info};

/// One mined itemset size and the rules derived from it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinedLevel {
    pub item_sets: ItemSetTable,
    /// Empty for size 1, or when rule generation is disabled.
    pub rules: Vec<AssociationRule>,
}

/// Result of a mining run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AprioriResult {
    /// Non-empty levels for sizes 1, 2, ... in order.
    pub levels: Vec<MinedLevel>,
    /// Number of transactions mined.
    pub transactions: usize,
}

impl AprioriResult {
    /// Largest itemset size that retained anything, or 0.
    pub fn max_size(&self) -> usize {
        self.levels.last().map_or(0, |level| level.item_sets.size)
    }

    /// All rules across levels, in level order.
    pub fn rules(&self) -> impl Iterator<Item = &AssociationRule> {
        self.levels.iter().flat_map(|level| level.rules.iter())
    }
}

/// Runs the level-wise mining loop.
///
/// Size 1 keeps every singleton; each following size keeps itemsets that
/// meet `min_support`. The loop stops at the first size that retains
/// nothing, so an empty transaction set yields no levels.
pub struct AprioriRunner;

impl AprioriRunner {
    /// Mines `transactions`.
    ///
    /// # Errors
    /// - [`MineError::ZeroSupport`] for an invalid configuration
    /// - [`MineError::MissingAntecedent`] if a rule antecedent has no count
    pub fn run(
        transactions: &TransactionSet,
        config: &AprioriConfig,
    ) -> Result<AprioriResult, MineError> {
        Self::run_with(transactions, config, |_| {})
    }

    /// Mines `transactions`, handing each level to `on_level` as soon as it
    /// is complete and before the next size is counted.
    ///
    /// Levels already passed to `on_level` stay reported even if a later
    /// level fails.
    ///
    /// # Errors
    /// Same as [`run`](Self::run).
    pub fn run_with<F>(
        transactions: &TransactionSet,
        config: &AprioriConfig,
        mut on_level: F,
    ) -> Result<AprioriResult, MineError>
    where
        F: FnMut(&MinedLevel),
    {
        config.validate()?;

        let mut miner = Apriori::new(transactions);
        debug!(
            transactions = transactions.len(),
            vocabulary = miner.vocabulary().len(),
            min_support = config.min_support,
            "starting itemset mining"
        );

        let mut levels = Vec::new();
        let mut size = 1;
        loop {
            let item_sets = miner.item_set(size, config.min_support, ItemSetKind::Frequent);
            if item_sets.is_empty() {
                break;
            }

            let rules = if size >= 2 && config.generate_rules {
                miner.rules(&item_sets)?
            } else {
                Vec::new()
            };
            debug!(
                label = %item_sets.label,
                itemsets = item_sets.len(),
                rules = rules.len(),
                "level mined"
            );

            let level = MinedLevel { item_sets, rules };
            on_level(&level);
            levels.push(level);
            size += 1;
        }

        info!(levels = levels.len(), "itemset mining finished");
        Ok(AprioriResult {
            levels,
            transactions: transactions.len(),
        })
    }
}
