//! Itemset counting and rule derivation.

use super::error::MineError;
use super::transactions::TransactionSet;
use super::types::{round2, AssociationRule, ItemSetKind, ItemSetTable, Itemset};
use itertools::Itertools;
use std::collections::HashMap;

/// Counts itemsets over a fixed transaction set and remembers every
/// retained count for later rule confidence lookups.
#[derive(Debug, Clone)]
pub struct Apriori<'a> {
    transactions: &'a TransactionSet,
    vocabulary: Vec<String>,
    counts: HashMap<Itemset, usize>,
}

impl<'a> Apriori<'a> {
    pub fn new(transactions: &'a TransactionSet) -> Self {
        Self {
            vocabulary: transactions.vocabulary(),
            transactions,
            counts: HashMap::new(),
        }
    }

    /// The sorted, distinct vocabulary candidates are drawn from.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Count recorded for `itemset` by any earlier table, if retained.
    pub fn count_of(&self, itemset: &Itemset) -> Option<usize> {
        self.counts.get(itemset).copied()
    }

    /// Builds the table of size-`size` itemsets.
    ///
    /// Every `size`-combination of the vocabulary is counted; nothing is
    /// pruned. Retention:
    ///
    /// - [`ItemSetKind::Frequent`], size 1: every singleton
    /// - [`ItemSetKind::Frequent`]: count ≥ `support`
    /// - [`ItemSetKind::Candidate`]: count > 0
    ///
    /// Retained counts are recorded for [`rules`](Self::rules).
    pub fn item_set(&mut self, size: usize, support: usize, kind: ItemSetKind) -> ItemSetTable {
        let mut table = ItemSetTable::new(size, support, kind);
        if size == 0 {
            return table;
        }

        for combination in self.vocabulary.iter().combinations(size) {
            let count = self.transactions.support_count(&combination);
            let keep = match kind {
                ItemSetKind::Candidate => count > 0,
                ItemSetKind::Frequent => size == 1 || count >= support,
            };
            if keep {
                let itemset = Itemset::new(combination.into_iter().cloned());
                self.counts.insert(itemset.clone(), count);
                table.entries.push((itemset, count));
            }
        }
        table
    }

    /// Derives association rules from every entry of size ≥ 2 in `table`.
    ///
    /// For each item `t` of an itemset `S`, emits `{t} => S \ {t}`, and when
    /// `|S| > 2` also `S \ {t} => {t}`. Rules are sorted by support, then
    /// confidence, both descending; ties keep generation order.
    ///
    /// # Errors
    /// [`MineError::MissingAntecedent`] if an antecedent was never retained
    /// by an earlier [`item_set`](Self::item_set) call.
    pub fn rules(&self, table: &ItemSetTable) -> Result<Vec<AssociationRule>, MineError> {
        let mut rules = Vec::new();
        for (itemset, count) in table.entries.iter().filter(|(set, _)| set.len() >= 2) {
            for item in itemset.items() {
                let single = Itemset::new([item.as_str()]);
                let rest = itemset.without(item);

                rules.push(self.rule(single.clone(), rest.clone(), *count)?);
                if itemset.len() > 2 {
                    rules.push(self.rule(rest, single, *count)?);
                }
            }
        }

        rules.sort_by(|a, b| {
            b.support
                .total_cmp(&a.support)
                .then(b.confidence.total_cmp(&a.confidence))
        });
        Ok(rules)
    }

    fn rule(
        &self,
        antecedent: Itemset,
        consequent: Itemset,
        count: usize,
    ) -> Result<AssociationRule, MineError> {
        let antecedent_count = match self.count_of(&antecedent) {
            Some(c) if c > 0 => c,
            _ => {
                return Err(MineError::MissingAntecedent {
                    antecedent: antecedent.to_string(),
                })
            }
        };

        let confidence = round2(count as f64 / antecedent_count as f64 * 100.0);
        let support = round2(count as f64 / self.transactions.len() as f64 * 100.0);
        Ok(AssociationRule {
            antecedent,
            consequent,
            confidence,
            support,
        })
    }
}
