//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.
//! It replaces per-process global parameters so independent runs can use
//! different settings side by side.

use super::error::GaError;
use super::selection::Selection;

/// Configuration for the genetic search.
///
/// # Defaults
///
/// The defaults reproduce the lab setup: 100 members, up to 10 000
/// generations, 30% mutation and roulette selection over pools of 10.
///
/// ```
/// use u_apriori_ga::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 10_000);
/// assert_eq!(config.selection, Selection::Roulette(10));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_apriori_ga::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_selection(Selection::Tournament(5))
///     .with_mutation_rate(0.1)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Target number of members after each selection step.
    pub population_size: usize,

    /// Generation cap. The run always stops after this many generations.
    pub max_generations: usize,

    /// Fraction of the population mutated per generation (0.0–1.0).
    ///
    /// The number of mutations is `floor(population_size × mutation_rate)`;
    /// members are picked with replacement.
    pub mutation_rate: f64,

    /// Probability that a drawn parent pair mates (0.0–1.0).
    ///
    /// Pairs that do not mate add no children.
    pub crossover_rate: f64,

    /// Policy that reduces the grown population back to its target size.
    pub selection: Selection,

    /// Whether to evaluate fitness in parallel.
    ///
    /// Only honored when the crate is built with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed once at the start of the run.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 10_000,
            mutation_rate: 0.3,
            crossover_rate: 1.0,
            selection: Selection::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// The lab setup: same as [`Default`], spelled out for call sites that
    /// want to name it.
    pub fn lab() -> Self {
        Self::default()
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mating probability.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the selection policy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of mutations applied per generation.
    pub fn mutation_count(&self) -> usize {
        (self.population_size as f64 * self.mutation_rate) as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size == 0 {
            return Err(GaError::EmptyPopulation);
        }
        if self.max_generations == 0 {
            return Err(GaError::ZeroGenerations);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::InvalidMutationRate(self.mutation_rate));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(GaError::InvalidCrossoverRate(self.crossover_rate));
        }
        self.selection.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 10_000);
        assert!((config.mutation_rate - 0.3).abs() < 1e-10);
        assert_eq!(config.crossover_rate, 1.0);
        assert_eq!(config.selection, Selection::Roulette(10));
        assert!(!config.parallel);
        assert!(config.seed.is_none());
        assert_eq!(GaConfig::lab(), config);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_max_generations(1000)
            .with_selection(Selection::Standard)
            .with_mutation_rate(0.05)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.selection, Selection::Standard);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        let config = GaConfig::default().with_population_size(0);
        assert_eq!(config.validate(), Err(GaError::EmptyPopulation));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert_eq!(config.validate(), Err(GaError::ZeroGenerations));
    }

    #[test]
    fn test_validate_rate_out_of_range() {
        let mut config = GaConfig::default();
        config.mutation_rate = 1.5;
        assert_eq!(config.validate(), Err(GaError::InvalidMutationRate(1.5)));
    }

    #[test]
    fn test_validate_crossover_rate_out_of_range() {
        let mut config = GaConfig::default();
        config.crossover_rate = -0.1;
        assert_eq!(config.validate(), Err(GaError::InvalidCrossoverRate(-0.1)));
        assert_eq!(GaConfig::default().with_crossover_rate(1.7).crossover_rate, 1.0);
    }

    #[test]
    fn test_validate_empty_pool() {
        let config = GaConfig::default().with_selection(Selection::Tournament(0));
        assert!(matches!(
            config.validate(),
            Err(GaError::EmptyPool { policy: "tournament" })
        ));
    }

    #[test]
    fn test_clamp_rate() {
        let config = GaConfig::default().with_mutation_rate(2.0);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
        let config = GaConfig::default().with_mutation_rate(-0.5);
        assert!(config.mutation_rate.abs() < 1e-10);
    }

    #[test]
    fn test_mutation_count_truncates() {
        let config = GaConfig::default()
            .with_population_size(7)
            .with_mutation_rate(0.3);
        assert_eq!(config.mutation_count(), 2);
        assert_eq!(GaConfig::default().mutation_count(), 30);
    }
}
