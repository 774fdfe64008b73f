//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use super::error::GaError;
use super::selection::Selection;

/// Configuration for the generational runner.
///
/// Controls population size, elitism, selection strategy, operator rates
/// and termination.
///
/// # Defaults
///
/// ```
/// use u_evolve::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Tournament(5))
///     .with_elite_count(4)
///     .with_mutation_rate(0.1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Number of fittest individuals carried unchanged into the next
    /// generation.
    ///
    /// Elites skip crossover and mutation. Must be smaller than the
    /// population size.
    pub elite_count: usize,

    /// Strategy filling the remaining `population_size - elite_count` slots.
    pub selection: Selection,

    /// Probability of recombining each pair of selected individuals (0.0–1.0).
    pub crossover_rate: f64,

    /// Probability of mutating each selected individual (0.0–1.0).
    pub mutation_rate: f64,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Stop as soon as the best fitness reaches this value.
    ///
    /// `None` runs until `max_generations`.
    pub target_fitness: Option<f64>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            elite_count: 1,
            selection: Selection::default(),
            crossover_rate: 0.7,
            mutation_rate: 0.7,
            max_generations: 500,
            target_fitness: None,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for tournament selection.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the fitness at which the run stops early.
    pub fn with_target_fitness(mut self, target: f64) -> Self {
        self.target_fitness = Some(target);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for the binary knapsack problem.
    ///
    /// - Population: 50, 1 elite, roulette-wheel selection
    /// - Crossover 0.7, mutation 0.7, 500 generations
    pub fn knapsack_preset() -> Self {
        Self {
            selection: Selection::RouletteWheel,
            ..Self::default()
        }
    }

    /// Preset for the two-variable equation problem.
    ///
    /// - Population: 10, 1 elite, tournament of 3
    /// - Crossover 0.5, mutation 0.5, 100 generations, target fitness 13
    pub fn equation_preset() -> Self {
        Self {
            population_size: 10,
            elite_count: 1,
            selection: Selection::Tournament(3),
            crossover_rate: 0.5,
            mutation_rate: 0.5,
            max_generations: 100,
            target_fitness: Some(13.0),
            seed: None,
        }
    }

    /// Number of individuals produced by selection each generation.
    pub fn selected_count(&self) -> usize {
        self.population_size.saturating_sub(self.elite_count)
    }

    /// Validates the configuration.
    ///
    /// Returns [`GaError::InvalidArgument`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size < 2 {
            return Err(GaError::invalid("population_size must be at least 2"));
        }
        if self.elite_count >= self.population_size {
            return Err(GaError::invalid(
                "elite_count too high: elites fill entire population",
            ));
        }
        if self.max_generations == 0 {
            return Err(GaError::invalid("max_generations must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(GaError::invalid("crossover_rate must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::invalid("mutation_rate must be within [0, 1]"));
        }
        if self.target_fitness.is_some_and(|t| !t.is_finite()) {
            return Err(GaError::invalid("target_fitness must be finite"));
        }
        self.selection.validate(self.population_size)
    }
}
