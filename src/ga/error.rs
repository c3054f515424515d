//! Error type for the GA framework.

use thiserror::Error;

/// Errors raised by GA configuration and operators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    #[error("mutation_rate must be within [0, 1], got {0}")]
    InvalidMutationRate(f64),

    #[error("crossover_rate must be within [0, 1], got {0}")]
    InvalidCrossoverRate(f64),

    #[error("{policy} pool size must be at least 1")]
    EmptyPool { policy: &'static str },

    #[error("cannot make {len} genes unique with only {upper} distinct values")]
    RepairImpossible { len: usize, upper: usize },

    #[error("duplicates remained after {rounds} repair rounds")]
    RepairExhausted { rounds: usize },
}
