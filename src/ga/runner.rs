//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete search:
//! initialization → (mutation →) crossover → selection → goal check → repeat.

use super::config::GaConfig;
use super::error::GaError;
use super::types::{Fitness, GaProblem, Individual};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Why the run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// A member satisfied [`GaProblem::is_goal`].
    GoalReached,
    /// `max_generations` ran out. The result is best effort only.
    GenerationCap,
}

/// Result of a GA run.
///
/// Contains the final population, its best member, and statistics about
/// the run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "I: serde::Serialize, I::Fitness: serde::Serialize",
        deserialize = "I: serde::Deserialize<'de>, I::Fitness: serde::Deserialize<'de>"
    ))
)]
pub struct GaResult<I: Individual> {
    /// The best member of the final population.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// The population as it stood when the run stopped.
    pub population: Vec<I>,

    /// Number of generations executed.
    pub generations: usize,

    /// Why the loop stopped.
    pub termination: Termination,

    /// Best fitness at the end of each generation.
    pub fitness_history: Vec<f64>,
}

impl<I: Individual> GaResult<I> {
    /// Returns `true` if the run ended on a goal state.
    pub fn solved(&self) -> bool {
        self.termination == Termination::GoalReached
    }
}

/// Executes the generational loop.
///
/// # Usage
///
/// ```ignore
/// let problem = NQueensProblem::new(8);
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the genetic search.
    ///
    /// Always returns within `config.max_generations` generations.
    ///
    /// # Errors
    /// Returns the [`GaConfig::validate`] error for an invalid configuration.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, GaError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        debug!(seed, population = config.population_size, "starting genetic search");

        // 1. Initialize population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        evaluate_population(problem, &mut population, config.parallel);

        let mut fitness_history = Vec::new();
        let mut termination = Termination::GenerationCap;
        let mut generations = 0;

        // 2. Generational loop
        for gen in 0..config.max_generations {
            if gen != 0 {
                mutate_population(problem, &mut population, config.mutation_count(), &mut rng);
            }

            let mut children = crossover_population(problem, &population, config, &mut rng);
            evaluate_population(problem, &mut children, config.parallel);
            population.extend(children);

            population = config
                .selection
                .reduce(population, config.population_size, &mut rng);

            generations = gen + 1;
            let best_fitness = find_best(&population).fitness();
            fitness_history.push(best_fitness.to_f64());
            problem.on_generation(generations, best_fitness);

            if problem.is_goal(best_fitness) {
                termination = Termination::GoalReached;
                break;
            }
        }

        let best = find_best(&population).clone();
        info!(
            generations,
            best_fitness = best.fitness().to_f64(),
            ?termination,
            "genetic search finished"
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            population,
            generations,
            termination,
            fitness_history,
        })
    }
}

/// Mutate `count` members picked with replacement, re-evaluating each.
fn mutate_population<P: GaProblem, R: Rng>(
    problem: &P,
    population: &mut [P::Individual],
    count: usize,
    rng: &mut R,
) {
    let n = population.len();
    for _ in 0..count {
        let member = &mut population[rng.random_range(0..n)];
        problem.mutate(member, rng);
        let f = problem.evaluate(member);
        member.set_fitness(f);
    }
}

/// Draw `population_size` random parent pairs; each pair that mates adds
/// two children.
fn crossover_population<P: GaProblem, R: Rng>(
    problem: &P,
    population: &[P::Individual],
    config: &GaConfig,
    rng: &mut R,
) -> Vec<P::Individual> {
    let n = population.len();
    let mut children = Vec::with_capacity(config.population_size * 2);
    for _ in 0..config.population_size {
        let a = rng.random_range(0..n);
        let b = rng.random_range(0..n);
        if config.crossover_rate < 1.0 && !rng.random_bool(config.crossover_rate) {
            continue;
        }
        let (c1, c2) = problem.crossover(&population[a], &population[b], rng);
        children.push(c1);
        children.push(c2);
    }
    children
}

/// Evaluate all individuals in the population.
#[cfg(feature = "parallel")]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    use rayon::prelude::*;

    if parallel {
        population.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
    } else {
        for ind in population.iter_mut() {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        }
    }
}

/// Evaluate all individuals in the population.
#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    _parallel: bool,
) {
    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Find the individual with the best (lowest) fitness.
fn find_best<I: Individual>(population: &[I]) -> &I {
    population
        .iter()
        .min_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Selection;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ---- OneMax problem: minimize the number of zero bits ----

    #[derive(Clone, Debug)]
    struct BitString {
        bits: Vec<bool>,
        fitness: u32,
    }

    impl Individual for BitString {
        type Fitness = u32;
        fn fitness(&self) -> u32 {
            self.fitness
        }
        fn set_fitness(&mut self, f: u32) {
            self.fitness = f;
        }
    }

    struct OneMaxProblem {
        n: usize,
        callbacks: AtomicUsize,
    }

    impl OneMaxProblem {
        fn new(n: usize) -> Self {
            Self {
                n,
                callbacks: AtomicUsize::new(0),
            }
        }
    }

    impl GaProblem for OneMaxProblem {
        type Individual = BitString;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> BitString {
            let bits: Vec<bool> = (0..self.n).map(|_| rng.random_bool(0.5)).collect();
            BitString {
                bits,
                fitness: u32::worst(),
            }
        }

        fn evaluate(&self, ind: &BitString) -> u32 {
            ind.bits.iter().filter(|&&b| !b).count() as u32
        }

        fn crossover<R: Rng>(
            &self,
            p1: &BitString,
            p2: &BitString,
            _rng: &mut R,
        ) -> (BitString, BitString) {
            let half = self.n / 2;
            let mut c1 = p1.clone();
            let mut c2 = p2.clone();
            c1.bits[half..].copy_from_slice(&p2.bits[half..]);
            c2.bits[half..].copy_from_slice(&p1.bits[half..]);
            (c1, c2)
        }

        fn mutate<R: Rng>(&self, ind: &mut BitString, rng: &mut R) {
            let idx = rng.random_range(0..self.n);
            ind.bits[idx] = !ind.bits[idx];
        }

        fn is_goal(&self, fitness: u32) -> bool {
            fitness == 0
        }

        fn on_generation(&self, _generation: usize, _best: u32) {
            self.callbacks.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn config() -> GaConfig {
        GaConfig::default()
            .with_population_size(40)
            .with_max_generations(500)
            .with_selection(Selection::Tournament(3))
            .with_seed(42)
    }

    #[test]
    fn test_onemax_reaches_goal() {
        let problem = OneMaxProblem::new(16);
        let cfg = config().with_selection(Selection::Standard);
        let result = GaRunner::run(&problem, &cfg).unwrap();

        assert!(result.solved(), "expected goal, got {:?}", result.best_fitness);
        assert_eq!(result.best_fitness, 0);
        assert!(result.generations <= 500);
    }

    #[test]
    fn test_population_size_restored_each_generation() {
        let problem = OneMaxProblem::new(12);
        for selection in [
            Selection::Standard,
            Selection::Roulette(10),
            Selection::Tournament(10),
        ] {
            let cfg = config().with_selection(selection).with_max_generations(5);
            let result = GaRunner::run(&problem, &cfg).unwrap();
            assert_eq!(result.population.len(), 40, "{selection:?}");
        }
    }

    #[test]
    fn test_generation_cap_is_respected() {
        // No goal: the loop must run to the cap exactly.
        struct Endless;
        impl GaProblem for Endless {
            type Individual = BitString;
            fn create_individual<R: Rng>(&self, _rng: &mut R) -> BitString {
                BitString {
                    bits: vec![false],
                    fitness: u32::worst(),
                }
            }
            fn evaluate(&self, _ind: &BitString) -> u32 {
                1
            }
        }

        let cfg = config().with_max_generations(17);
        let result = GaRunner::run(&Endless, &cfg).unwrap();
        assert_eq!(result.generations, 17);
        assert_eq!(result.termination, Termination::GenerationCap);
        assert_eq!(result.fitness_history.len(), 17);
        assert!(!result.solved());
    }

    #[test]
    fn test_callback_once_per_generation() {
        let problem = OneMaxProblem::new(64);
        let cfg = config().with_max_generations(9).with_population_size(4);
        let result = GaRunner::run(&problem, &cfg).unwrap();
        assert_eq!(
            problem.callbacks.load(Ordering::Relaxed),
            result.generations
        );
    }

    #[test]
    fn test_same_seed_same_result() {
        let problem = OneMaxProblem::new(20);
        let cfg = config().with_max_generations(30);
        let a = GaRunner::run(&problem, &cfg).unwrap();
        let b = GaRunner::run(&problem, &cfg).unwrap();
        assert_eq!(a.fitness_history, b.fitness_history);
        assert_eq!(a.best.bits, b.best.bits);
    }

    #[test]
    fn test_standard_selection_is_monotone() {
        // Truncation keeps the parents in the candidate pool; without
        // mutation the best fitness never regresses.
        let problem = OneMaxProblem::new(24);
        let cfg = config()
            .with_selection(Selection::Standard)
            .with_mutation_rate(0.0)
            .with_max_generations(40);
        let result = GaRunner::run(&problem, &cfg).unwrap();
        for window in result.fitness_history.windows(2) {
            assert!(window[1] <= window[0], "{:?}", result.fitness_history);
        }
    }

    #[test]
    fn test_zero_crossover_rate_adds_no_children() {
        // No mating and no mutation: the population never changes.
        let problem = OneMaxProblem::new(24);
        let cfg = config()
            .with_selection(Selection::Standard)
            .with_mutation_rate(0.0)
            .with_crossover_rate(0.0)
            .with_max_generations(10);
        let result = GaRunner::run(&problem, &cfg).unwrap();
        let first = result.fitness_history[0];
        assert!(result.fitness_history.iter().all(|&f| f == first));
        assert_eq!(result.population.len(), 40);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let problem = OneMaxProblem::new(4);
        let cfg = config().with_population_size(0);
        assert!(matches!(
            GaRunner::run(&problem, &cfg),
            Err(GaError::EmptyPopulation)
        ));
    }

    #[test]
    fn test_default_operators() {
        struct NoOp;
        impl GaProblem for NoOp {
            type Individual = BitString;
            fn create_individual<R: Rng>(&self, rng: &mut R) -> BitString {
                BitString {
                    bits: vec![rng.random_bool(0.5)],
                    fitness: u32::worst(),
                }
            }
            fn evaluate(&self, ind: &BitString) -> u32 {
                u32::from(!ind.bits[0])
            }
        }

        let cfg = config().with_max_generations(10);
        let result = GaRunner::run(&NoOp, &cfg).unwrap();
        assert!(result.generations > 0);
        assert!(!result.fitness_history.is_empty());
    }
}
