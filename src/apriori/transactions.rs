//! Transaction loading.

use super::error::MineError;
use std::convert::Infallible;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// One transaction: the raw input line and its whitespace-separated items.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transaction {
    line: String,
    items: Vec<String>,
}

impl Transaction {
    /// Parses one line. Items are split on whitespace.
    pub fn parse(line: &str) -> Self {
        Self {
            line: line.trim().to_owned(),
            items: line.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// The trimmed source line.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Items in input order. Repeats are kept.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Whole-word membership test; never a substring match.
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Returns `true` if every item of `itemset` occurs in this transaction.
    pub fn contains_all<S: AsRef<str>>(&self, itemset: &[S]) -> bool {
        itemset.iter().all(|item| self.contains(item.as_ref()))
    }
}

impl FromStr for TransactionSet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_text(s))
    }
}

/// An immutable, ordered set of transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransactionSet {
    transactions: Vec<Transaction>,
}

impl TransactionSet {
    /// Builds a set from lines, skipping blank and whitespace-only lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let transactions = lines
            .into_iter()
            .filter(|line| !line.as_ref().trim().is_empty())
            .map(|line| Transaction::parse(line.as_ref()))
            .collect();
        Self { transactions }
    }

    /// Builds a set from newline-delimited text.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Reads a transaction file.
    ///
    /// # Errors
    /// [`MineError::Io`] if the file is missing or unreadable.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, MineError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    /// Number of transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Distinct items across all transactions, sorted lexicographically.
    pub fn vocabulary(&self) -> Vec<String> {
        let mut vocabulary: Vec<String> = self
            .transactions
            .iter()
            .flat_map(|t| t.items().iter().cloned())
            .collect();
        vocabulary.sort();
        vocabulary.dedup();
        vocabulary
    }

    /// Number of transactions containing every item of `itemset`.
    pub fn support_count<S: AsRef<str>>(&self, itemset: &[S]) -> usize {
        self.transactions
            .iter()
            .filter(|t| t.contains_all(itemset))
            .count()
    }
}

impl<'a> IntoIterator for &'a TransactionSet {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
