//! Frequent itemset and association rule mining.
//!
//! A brute-force Apriori variant: at every itemset size `k` all
//! `k`-combinations of the full, sorted vocabulary are counted against the
//! transactions. No candidate pruning is applied.
//!
//! # Key Types
//!
//! - [`TransactionSet`]: Transactions loaded from text, one per non-blank line
//! - [`Apriori`]: Counts itemsets of one size and derives association rules
//! - [`AprioriRunner`]: Mines sizes 1, 2, ... until a size retains nothing
//! - [`AprioriConfig`]: Support threshold and rule generation switch
//!
//! # Example
//!
//! ```
//! use u_apriori_ga::apriori::{AprioriConfig, AprioriRunner, TransactionSet};
//!
//! let transactions = TransactionSet::from_text("a b c\na b\nb c\na c\n");
//! let result = AprioriRunner::run(&transactions, &AprioriConfig::default()).unwrap();
//!
//! assert_eq!(result.levels.len(), 2);
//! assert_eq!(result.levels[1].item_sets.label, "L2");
//! ```
//!
//! # References
//!
//! - Agrawal & Srikant (1994), "Fast Algorithms for Mining Association Rules"

mod config;
mod error;
mod miner;
mod runner;
mod transactions;
mod types;

pub use config::AprioriConfig;
pub use error::MineError;
pub use miner::Apriori;
pub use runner::{AprioriResult, AprioriRunner, MinedLevel};
pub use transactions::{Transaction, TransactionSet};
pub use types::{AssociationRule, ItemSetKind, ItemSetTable, Itemset};
