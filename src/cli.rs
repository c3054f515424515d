//! CLI argument parsing

use crate::ga::{Crossover, GaConfig, Mutation, Selection};
use crate::nqueens::{Initialization, NQueensProblem};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Survivor selection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelectionArg {
    /// Keep the lowest-fitness members
    Standard,
    /// Roulette wheel over a random pool
    Roulette,
    /// Best of a random pool
    Tournament,
}

/// Crossover policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CrossoverArg {
    /// Swap halves at the midpoint
    SinglePoint,
    /// Fair coin per position
    Uniform,
    /// Reorder a random subset by the other parent
    OrderBased,
    /// Partially-mapped crossover over a random segment
    PartiallyMapped,
    /// Keep random positions, fill the rest in the other parent's order
    PositionBased,
}

impl From<CrossoverArg> for Crossover {
    fn from(arg: CrossoverArg) -> Self {
        match arg {
            CrossoverArg::SinglePoint => Crossover::SinglePoint,
            CrossoverArg::Uniform => Crossover::Uniform,
            CrossoverArg::OrderBased => Crossover::OrderBased,
            CrossoverArg::PartiallyMapped => Crossover::PartiallyMapped,
            CrossoverArg::PositionBased => Crossover::PositionBased,
        }
    }
}

/// Mutation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MutationArg {
    /// Overwrite one column with a random value
    Reset,
    /// Exchange two columns
    Swap,
}

impl From<MutationArg> for Mutation {
    fn from(arg: MutationArg) -> Self {
        match arg {
            MutationArg::Reset => Mutation::Reset,
            MutationArg::Swap => Mutation::Swap,
        }
    }
}

/// Initial placement of new members
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InitArg {
    /// Independent random column per row
    Random,
    /// Shuffled permutation of the columns
    Permutation,
}

impl From<InitArg> for Initialization {
    fn from(arg: InitArg) -> Self {
        match arg {
            InitArg::Random => Initialization::Random,
            InitArg::Permutation => Initialization::Permutation,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "u-apriori-ga")]
#[command(version)]
#[command(about = "Apriori itemset mining and N-Queens genetic search", long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Mine frequent itemsets and association rules from a transaction file
    Apriori(AprioriArgs),
    /// Search for an N-Queens placement with a genetic algorithm
    Queens(QueensArgs),
}

#[derive(clap::Args, Debug)]
pub struct AprioriArgs {
    /// Transaction file: one transaction per line, items separated by spaces
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Minimum number of transactions an itemset must occur in
    #[arg(short, long, default_value = "2")]
    pub support: usize,

    /// Skip association rules
    #[arg(long = "no-rules")]
    pub no_rules: bool,
}

#[derive(clap::Args, Debug)]
pub struct QueensArgs {
    /// Board size
    #[arg(short = 'n', long = "size", default_value = "8")]
    pub n: usize,

    /// Population size after each selection
    #[arg(short, long, default_value = "100")]
    pub population: usize,

    /// Generation cap
    #[arg(short, long, default_value = "10000")]
    pub generations: usize,

    /// Fraction of the population mutated per generation
    #[arg(short, long = "mutation-rate", default_value = "0.3")]
    pub mutation_rate: f64,

    /// Probability that a drawn parent pair mates
    #[arg(long = "crossover-rate", default_value = "1.0")]
    pub crossover_rate: f64,

    /// Selection policy
    #[arg(long, value_enum, default_value = "roulette")]
    pub selection: SelectionArg,

    /// Pool size for roulette and tournament selection
    #[arg(long, default_value = "10")]
    pub pool: usize,

    /// Crossover policy
    #[arg(long, value_enum, default_value = "single-point")]
    pub crossover: CrossoverArg,

    /// Mutation policy
    #[arg(long, value_enum, default_value = "reset")]
    pub mutation: MutationArg,

    /// Initial placement of new members
    #[arg(long, value_enum, default_value = "random")]
    pub init: InitArg,

    /// Reassign duplicated columns after creation, crossover and mutation
    #[arg(long)]
    pub repair: bool,

    /// Maximum repair rounds per member
    #[arg(long = "repair-rounds", default_value_t = NQueensProblem::DEFAULT_REPAIR_ROUNDS)]
    pub repair_rounds: usize,

    /// Random seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,
}

impl QueensArgs {
    /// Selection policy with its pool size.
    pub fn selection(&self) -> Selection {
        match self.selection {
            SelectionArg::Standard => Selection::Standard,
            SelectionArg::Roulette => Selection::Roulette(self.pool),
            SelectionArg::Tournament => Selection::Tournament(self.pool),
        }
    }

    /// GA configuration built from the arguments.
    pub fn ga_config(&self) -> GaConfig {
        let config = GaConfig::default()
            .with_population_size(self.population)
            .with_max_generations(self.generations)
            .with_mutation_rate(self.mutation_rate)
            .with_crossover_rate(self.crossover_rate)
            .with_selection(self.selection());
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// N-Queens problem built from the arguments.
    pub fn problem(&self) -> NQueensProblem {
        NQueensProblem::new(self.n)
            .with_crossover(self.crossover.into())
            .with_mutation(self.mutation.into())
            .with_initialization(self.init.into())
            .with_repair(self.repair)
            .with_repair_rounds(self.repair_rounds)
    }
}
