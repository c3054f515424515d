//! The N-Queens search problem.

use super::board::{collisions, Board};
use crate::ga::operators::{repair_duplicates, scrambled_identity, Crossover, Mutation};
use crate::ga::GaProblem;
use rand::Rng;
use std::ops::RangeInclusive;
use tracing::{trace, warn};

/// How new members are created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Initialization {
    /// Every column drawn uniformly from `0..n`; duplicates allowed.
    #[default]
    Random,
    /// The identity placement scrambled by a random number of swaps, so
    /// every column is used exactly once.
    Permutation,
}

/// N-Queens on an `n × n` board.
///
/// By default members start with every column drawn uniformly from `0..n`,
/// so duplicated columns are allowed. [`Initialization::Permutation`]
/// starts from distinct columns instead; pair it with a permutation-safe
/// crossover and [`Mutation::Swap`] to keep them distinct. With
/// [`with_repair`](Self::with_repair) enabled, new members and every child
/// or mutant are rewritten until all columns are distinct.
///
/// # Examples
///
/// ```
/// use u_apriori_ga::ga::{Crossover, GaConfig, GaRunner, Selection};
/// use u_apriori_ga::nqueens::{collisions, NQueensProblem};
///
/// let problem = NQueensProblem::new(6).with_crossover(Crossover::Uniform);
/// let config = GaConfig::default()
///     .with_population_size(60)
///     .with_max_generations(300)
///     .with_selection(Selection::Tournament(4))
///     .with_seed(3);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(collisions(&result.best.queens), result.best_fitness);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NQueensProblem {
    n: usize,
    crossover: Crossover,
    mutation: Mutation,
    init: Initialization,
    repair: bool,
    repair_rounds: usize,
}

impl NQueensProblem {
    /// Default bound on repair rounds per member.
    pub const DEFAULT_REPAIR_ROUNDS: usize = 1_000;

    /// Swap count range for [`Initialization::Permutation`].
    pub const SHUFFLES: RangeInclusive<usize> = 8..=20;

    /// Creates a problem for an `n × n` board with random columns,
    /// single-point crossover, reset mutation and no repair.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            crossover: Crossover::default(),
            mutation: Mutation::default(),
            init: Initialization::default(),
            repair: false,
            repair_rounds: Self::DEFAULT_REPAIR_ROUNDS,
        }
    }

    /// Sets the crossover policy.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the mutation policy.
    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    /// Sets how new members are created.
    pub fn with_initialization(mut self, init: Initialization) -> Self {
        self.init = init;
        self
    }

    /// Enables or disables duplicate-column repair.
    pub fn with_repair(mut self, repair: bool) -> Self {
        self.repair = repair;
        self
    }

    /// Sets the maximum number of repair rounds per member.
    pub fn with_repair_rounds(mut self, rounds: usize) -> Self {
        self.repair_rounds = rounds;
        self
    }

    /// Board size.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Active crossover policy.
    pub fn crossover_policy(&self) -> Crossover {
        self.crossover
    }

    /// Active mutation policy.
    pub fn mutation_policy(&self) -> Mutation {
        self.mutation
    }

    /// Active initialization.
    pub fn initialization(&self) -> Initialization {
        self.init
    }

    /// Maximum repair rounds per member.
    pub fn repair_rounds(&self) -> usize {
        self.repair_rounds
    }

    fn finish<R: Rng>(&self, mut queens: Vec<usize>, rng: &mut R) -> Board {
        if self.repair {
            self.repair_in_place(&mut queens, rng);
        }
        Board::new(queens)
    }

    fn repair_in_place<R: Rng>(&self, queens: &mut [usize], rng: &mut R) {
        if let Err(err) = repair_duplicates(queens, self.n, self.repair_rounds, rng) {
            warn!(%err, "keeping member with duplicate columns");
        }
    }
}

impl GaProblem for NQueensProblem {
    type Individual = Board;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Board {
        let queens = match self.init {
            Initialization::Random => (0..self.n).map(|_| rng.random_range(0..self.n)).collect(),
            Initialization::Permutation => {
                let swaps = rng.random_range(Self::SHUFFLES);
                scrambled_identity(self.n, swaps, rng)
            }
        };
        self.finish(queens, rng)
    }

    fn evaluate(&self, board: &Board) -> u32 {
        collisions(&board.queens)
    }

    fn crossover<R: Rng>(&self, parent1: &Board, parent2: &Board, rng: &mut R) -> (Board, Board) {
        let (c1, c2) = self.crossover.apply(&parent1.queens, &parent2.queens, rng);
        (self.finish(c1, rng), self.finish(c2, rng))
    }

    fn mutate<R: Rng>(&self, board: &mut Board, rng: &mut R) {
        self.mutation.apply(&mut board.queens, self.n, rng);
        if self.repair {
            self.repair_in_place(&mut board.queens, rng);
        }
    }

    fn is_goal(&self, fitness: u32) -> bool {
        fitness == 0
    }

    fn on_generation(&self, generation: usize, best_fitness: u32) {
        trace!(generation, best_fitness, "n-queens generation");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{GaConfig, GaRunner, Individual, Selection, Termination};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn config() -> GaConfig {
        GaConfig::default()
            .with_population_size(100)
            .with_max_generations(2_000)
            .with_seed(42)
    }

    #[test]
    fn test_create_individual_in_range() {
        let problem = NQueensProblem::new(8);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let board = problem.create_individual(&mut rng);
            assert_eq!(board.n(), 8);
            assert!(board.queens.iter().all(|&c| c < 8));
        }
    }

    #[test]
    fn test_repair_yields_distinct_columns() {
        let problem = NQueensProblem::new(8).with_repair(true);
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..20 {
            let board = problem.create_individual(&mut rng);
            let distinct: HashSet<_> = board.queens.iter().collect();
            assert_eq!(distinct.len(), 8, "{:?}", board.queens);
        }
    }

    #[test]
    fn test_mutate_with_repair_keeps_distinct() {
        let problem = NQueensProblem::new(6).with_repair(true);
        let mut rng = StdRng::seed_from_u64(4);
        let mut board = Board::new(vec![0, 1, 2, 3, 4, 5]);
        for _ in 0..30 {
            problem.mutate(&mut board, &mut rng);
            let distinct: HashSet<_> = board.queens.iter().collect();
            assert_eq!(distinct.len(), 6);
        }
    }

    #[test]
    fn test_permutation_init_uses_every_column() {
        let problem = NQueensProblem::new(10).with_initialization(Initialization::Permutation);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..30 {
            let mut board = problem.create_individual(&mut rng);
            board.queens.sort_unstable();
            assert_eq!(board.queens, (0..10).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_permutation_operators_keep_columns_distinct() {
        let problem = NQueensProblem::new(8)
            .with_initialization(Initialization::Permutation)
            .with_mutation(Mutation::Swap);
        let mut rng = StdRng::seed_from_u64(6);

        for crossover in [
            Crossover::OrderBased,
            Crossover::PartiallyMapped,
            Crossover::PositionBased,
        ] {
            let problem = problem.clone().with_crossover(crossover);
            let p1 = problem.create_individual(&mut rng);
            let p2 = problem.create_individual(&mut rng);
            for _ in 0..20 {
                let (mut c1, c2) = problem.crossover(&p1, &p2, &mut rng);
                problem.mutate(&mut c1, &mut rng);
                for child in [&c1, &c2] {
                    let distinct: HashSet<_> = child.queens.iter().collect();
                    assert_eq!(distinct.len(), 8, "{crossover:?}: {:?}", child.queens);
                }
            }
        }
    }

    #[test]
    fn test_builder_settings() {
        let problem = NQueensProblem::new(6)
            .with_crossover(Crossover::PositionBased)
            .with_mutation(Mutation::Swap)
            .with_initialization(Initialization::Permutation)
            .with_repair_rounds(5);
        assert_eq!(problem.n(), 6);
        assert_eq!(problem.crossover_policy(), Crossover::PositionBased);
        assert_eq!(problem.mutation_policy(), Mutation::Swap);
        assert_eq!(problem.initialization(), Initialization::Permutation);
        assert_eq!(problem.repair_rounds(), 5);

        let defaults = NQueensProblem::new(6);
        assert_eq!(defaults.crossover_policy(), Crossover::SinglePoint);
        assert_eq!(defaults.mutation_policy(), Mutation::Reset);
        assert_eq!(defaults.initialization(), Initialization::Random);
        assert_eq!(defaults.repair_rounds(), NQueensProblem::DEFAULT_REPAIR_ROUNDS);
    }

    #[test]
    fn test_zero_repair_rounds_keeps_member() {
        let problem = NQueensProblem::new(4).with_repair(true).with_repair_rounds(0);
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new(vec![2, 2, 2, 2]);
        problem.mutate(&mut board, &mut rng);
        assert_eq!(board.n(), 4);
        assert!(board.queens.iter().all(|&c| c < 4));
    }

    #[test]
    fn test_evaluate_matches_collisions() {
        let problem = NQueensProblem::new(4);
        assert_eq!(problem.evaluate(&Board::new(vec![0, 1, 2, 3])), 6);
        assert_eq!(problem.evaluate(&Board::new(vec![1, 3, 0, 2])), 0);
        assert!(problem.is_goal(0));
        assert!(!problem.is_goal(1));
    }

    #[test]
    fn test_single_point_children() {
        let problem = NQueensProblem::new(4);
        let mut rng = StdRng::seed_from_u64(0);
        let (c1, c2) = problem.crossover(
            &Board::new(vec![0, 0, 0, 0]),
            &Board::new(vec![1, 1, 1, 1]),
            &mut rng,
        );
        assert_eq!(c1.queens, vec![0, 0, 1, 1]);
        assert_eq!(c2.queens, vec![1, 1, 0, 0]);
    }

    #[test]
    fn test_solves_five_queens_with_every_policy() {
        for crossover in [Crossover::SinglePoint, Crossover::Uniform, Crossover::OrderBased] {
            let problem = NQueensProblem::new(5).with_crossover(crossover);
            let result = GaRunner::run(&problem, &config()).unwrap();

            assert_eq!(result.termination, Termination::GoalReached, "{crossover:?}");
            assert_eq!(collisions(&result.best.queens), 0);
            assert_eq!(result.best.fitness(), 0);
        }
    }

    #[test]
    fn test_solves_six_queens_with_permutation_encoding() {
        for crossover in [Crossover::PartiallyMapped, Crossover::PositionBased] {
            let problem = NQueensProblem::new(6)
                .with_initialization(Initialization::Permutation)
                .with_mutation(Mutation::Swap)
                .with_crossover(crossover);
            let cfg = config().with_crossover_rate(0.7);
            let result = GaRunner::run(&problem, &cfg).unwrap();

            assert_eq!(result.termination, Termination::GoalReached, "{crossover:?}");
            assert_eq!(collisions(&result.best.queens), 0);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_result_serde_roundtrip() {
        let problem = NQueensProblem::new(5);
        let result = GaRunner::run(&problem, &config().with_max_generations(20)).unwrap();

        let json = serde_json::to_string(&result).unwrap();
        let back: crate::ga::GaResult<Board> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.best, result.best);
        assert_eq!(back.best_fitness, result.best_fitness);
        assert_eq!(back.generations, result.generations);
        assert_eq!(back.termination, result.termination);
        assert_eq!(back.population, result.population);
    }

    #[test]
    fn test_eight_queens_result_is_consistent() {
        let problem = NQueensProblem::new(8);
        let cfg = config().with_selection(Selection::Tournament(10));
        let result = GaRunner::run(&problem, &cfg).unwrap();

        assert!(result.generations <= 2_000);
        assert_eq!(result.population.len(), 100);
        assert_eq!(collisions(&result.best.queens), result.best_fitness);
    }
}
