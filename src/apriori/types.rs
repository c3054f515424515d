//! Itemsets, itemset tables and association rules.

use std::fmt;

/// A set of distinct items in canonical (sorted) order.
///
/// Displayed as the items joined by `", "`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itemset(Vec<String>);

impl Itemset {
    /// Builds an itemset, sorting and deduplicating the items.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items: Vec<String> = items.into_iter().map(Into::into).collect();
        items.sort();
        items.dedup();
        Self(items)
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// This itemset with `item` removed.
    pub fn without(&self, item: &str) -> Self {
        Self(self.0.iter().filter(|i| *i != item).cloned().collect())
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

/// Retention rule used when building an [`ItemSetTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemSetKind {
    /// Keep itemsets whose count meets the support threshold (`L{k}`).
    /// Size-1 tables keep every singleton.
    Frequent,
    /// Keep every itemset that occurs at least once (`C{k}`).
    Candidate,
}

impl ItemSetKind {
    fn prefix(self) -> char {
        match self {
            ItemSetKind::Frequent => 'L',
            ItemSetKind::Candidate => 'C',
        }
    }
}

/// All retained itemsets of one size with their occurrence counts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSetTable {
    /// `"L{size}"` or `"C{size}"`.
    pub label: String,
    pub size: usize,
    pub kind: ItemSetKind,
    /// Threshold the table was evaluated against.
    pub support: usize,
    /// Retained itemsets in generation order.
    pub entries: Vec<(Itemset, usize)>,
}

impl ItemSetTable {
    pub fn new(size: usize, support: usize, kind: ItemSetKind) -> Self {
        Self {
            label: format!("{}{}", kind.prefix(), size),
            size,
            kind,
            support,
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count of `itemset` in this table, if retained.
    pub fn count_of(&self, itemset: &Itemset) -> Option<usize> {
        self.entries
            .iter()
            .find(|(set, _)| set == itemset)
            .map(|&(_, count)| count)
    }
}

/// An `antecedent => consequent` rule with percentages rounded to two
/// decimals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssociationRule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    /// `count(A ∪ B) / count(A) × 100`.
    pub confidence: f64,
    /// `count(A ∪ B) / transactions × 100`.
    pub support: f64,
}

impl fmt::Display for AssociationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.antecedent, self.consequent)
    }
}

/// Rounds a percentage to two decimals, ties to even.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
