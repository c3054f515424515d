//! Itemset mining and genetic search.
//!
//! Two independent batch computations over small in-memory data:
//!
//! - **Apriori**: Brute-force frequent itemset counting over a transaction
//!   file, with single-item and complement association rules ranked by
//!   support and confidence.
//! - **Genetic Algorithm (GA)**: A generational loop (mutation, crossover,
//!   survivor selection) with pluggable selection and crossover policies.
//! - **N-Queens**: The GA applied to placing N non-attacking queens.
//!
//! All stochastic steps draw from one seedable random source per run, so
//! a fixed seed reproduces a run exactly.

pub mod apriori;
pub mod cli;
pub mod ga;
pub mod nqueens;
pub mod report;
