//! Error type for itemset mining.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading transactions or mining rules.
#[derive(Error, Debug)]
pub enum MineError {
    #[error("failed to read transactions from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("min_support must be at least 1")]
    ZeroSupport,

    #[error("no support count recorded for antecedent {{{antecedent}}}")]
    MissingAntecedent { antecedent: String },
}
