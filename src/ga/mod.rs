//! Generational genetic search.
//!
//! A small, domain-agnostic GA built on trait-based abstractions. Users
//! define their problem by implementing [`GaProblem`], which specifies how
//! to create, evaluate, recombine and mutate individuals, and when a goal
//! state has been reached.
//!
//! # Generation loop
//!
//! 1. mutate a fixed fraction of the population (skipped on the first generation)
//! 2. crossover `population_size` random parent pairs, each mating with
//!    probability `crossover_rate` and appending both children
//! 3. reduce the grown population back to `population_size` via [`Selection`]
//! 4. stop when [`GaProblem::is_goal`] accepts the best fitness, or at the cap
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, selection, mutation rate)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Final population, best member and statistics
//!
//! # Submodules
//!
//! - [`operators`]: Crossover, mutation and repair operators for integer genes
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem" (PMX)
//! - Syswerda (1991), "Schedule Optimization Using Genetic Algorithms" (order-based crossover)

mod config;
mod error;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use error::GaError;
pub use operators::{Crossover, Mutation};
pub use runner::{GaResult, GaRunner, Termination};
pub use selection::Selection;
pub use types::{Fitness, GaProblem, Individual};
