//! Survivor selection policies.
//!
//! After crossover the population temporarily holds `population_size`
//! extra children. Selection reduces it back to the target size.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::error::GaError;
use super::types::{Fitness, Individual};
use rand::Rng;

/// Survivor selection policy.
///
/// All policies assume **minimization** (lower fitness = better).
///
/// # Examples
///
/// ```
/// use u_apriori_ga::ga::Selection;
///
/// // Truncation: keep the best members
/// let sel = Selection::Standard;
///
/// // Roulette wheel over random pools of 10
/// let sel = Selection::Roulette(10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Sort ascending by fitness and keep the first `target` members.
    ///
    /// Ties keep their current order.
    Standard,

    /// Roulette over a random pool of `k` members (drawn with replacement).
    ///
    /// Each pool member receives `pool_sum - fitness` tickets, clamped to a
    /// minimum of one, so lower fitness wins proportionally more often.
    /// A pool whose members all score zero degrades to a uniform draw.
    Roulette(usize),

    /// Tournament over a random pool of `k` members (drawn with
    /// replacement); the lowest fitness wins, earliest draw on ties.
    Tournament(usize),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Roulette(10)
    }
}

impl Selection {
    /// Checks pool sizes.
    pub fn validate(&self) -> Result<(), GaError> {
        match self {
            Selection::Roulette(0) => Err(GaError::EmptyPool { policy: "roulette" }),
            Selection::Tournament(0) => Err(GaError::EmptyPool {
                policy: "tournament",
            }),
            _ => Ok(()),
        }
    }

    /// Reduces `population` to `target` members.
    ///
    /// Roulette and tournament draw `target` winners, so the same member may
    /// be chosen several times. Standard never returns more members than it
    /// was given.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn reduce<I: Individual, R: Rng>(
        &self,
        population: Vec<I>,
        target: usize,
        rng: &mut R,
    ) -> Vec<I> {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Standard => standard(population, target),
            Selection::Roulette(k) => (0..target)
                .map(|_| population[roulette(&population, *k, rng)].clone())
                .collect(),
            Selection::Tournament(k) => (0..target)
                .map(|_| population[tournament(&population, *k, rng)].clone())
                .collect(),
        }
    }
}

/// Truncation selection: stable sort by fitness, keep the head.
fn standard<I: Individual>(mut population: Vec<I>, target: usize) -> Vec<I> {
    population.sort_by(|a, b| {
        a.fitness()
            .partial_cmp(&b.fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    population.truncate(target);
    population
}

/// Draw `k` random indices (with replacement).
fn draw_pool<R: Rng>(n: usize, k: usize, rng: &mut R) -> Vec<usize> {
    (0..k.max(1)).map(|_| rng.random_range(0..n)).collect()
}

/// Tournament: best of a random pool.
fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    let pool = draw_pool(population.len(), k, rng);

    let mut best_idx = pool[0];
    for &idx in &pool[1..] {
        if population[idx].fitness() < population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Roulette: one ticket draw over a random pool.
fn roulette<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    let pool = draw_pool(population.len(), k, rng);

    let fitnesses: Vec<f64> = pool
        .iter()
        .map(|&idx| population[idx].fitness().to_f64())
        .collect();
    let sum: f64 = fitnesses.iter().sum();

    let tickets: Vec<f64> = fitnesses.iter().map(|&f| (sum - f).max(1.0)).collect();
    let total: f64 = tickets.iter().sum();

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (slot, &t) in tickets.iter().enumerate() {
        cumulative += t;
        if cumulative > threshold {
            return pool[slot];
        }
    }

    pool[pool.len() - 1] // floating-point fallback
}
