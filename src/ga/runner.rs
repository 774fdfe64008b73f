//! Generational loop execution.
//!
//! [`next_generation`] performs one replacement step:
//! elites ++ (selection → crossover → mutation).
//! [`GaRunner`] repeats it from a random initial population until the
//! target fitness or the generation limit is reached.

use super::config::GaConfig;
use super::error::GaError;
use super::operators::{crossover, mutation};
use super::population::{best, generate_population};
use super::selection::elite_selection;
use super::types::Chromosome;
use crate::random::create_rng_from;
use rand::Rng;
use tracing::{debug, info};

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<C: Chromosome> {
    /// The best individual seen during the run.
    pub best: C,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Number of replacement steps executed.
    pub generations: usize,

    /// Whether the run stopped because `target_fitness` was reached.
    pub reached_target: bool,

    /// Best fitness of the population at each generation, starting with
    /// the initial population.
    pub fitness_history: Vec<f64>,
}

/// Builds the next generation from `population`.
///
/// The `config.elite_count` fittest individuals pass through untouched.
/// The remaining slots are filled by `config.selection`, then crossover
/// and mutation run on those selected copies only. The result has
/// `config.population_size` individuals, elites first.
pub fn next_generation<C: Chromosome, R: Rng>(
    population: &[C],
    config: &GaConfig,
    rng: &mut R,
) -> Result<Vec<C>, GaError> {
    let mut next = elite_selection(config.elite_count, population)?;
    let mut selected = config
        .selection
        .select(config.selected_count(), population, rng)?;

    crossover(&mut selected, config.crossover_rate, rng)?;
    mutation(&mut selected, config.mutation_rate, rng)?;

    next.append(&mut selected);
    Ok(next)
}

/// Executes the generational loop.
///
/// # Usage
///
/// ```
/// use u_evolve::ga::{GaConfig, GaRunner};
/// use u_evolve::problems::equation::{Equation, EquationConfig};
///
/// let config = GaConfig::equation_preset()
///     .with_max_generations(1000)
///     .with_seed(42);
/// let result = GaRunner::run::<Equation>(&EquationConfig::default(), &config).unwrap();
/// assert!(result.reached_target);
/// assert_eq!(result.best_fitness, 13.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    pub fn run<C: Chromosome>(
        chromosome_config: &C::Config,
        config: &GaConfig,
    ) -> Result<GaResult<C>, GaError> {
        let mut rng = create_rng_from(config.seed);
        Self::run_with_rng(chromosome_config, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Errors
    ///
    /// Fails if `config` is invalid, or propagates the first engine or
    /// chromosome error.
    pub fn run_with_rng<C: Chromosome, R: Rng>(
        chromosome_config: &C::Config,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<C>, GaError> {
        config.validate()?;

        let mut population: Vec<C> =
            generate_population(config.population_size, chromosome_config, rng)?;

        let mut best_overall = current_best(&population)?;
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        let mut generations = 0;

        loop {
            let gen_best = current_best(&population)?;
            let gen_fitness = gen_best.fitness();
            fitness_history.push(gen_fitness);
            debug!(generation = generations, best_fitness = gen_fitness, "generation");

            if gen_best.ranks_above(&best_overall) {
                best_overall = gen_best;
            }

            if config.target_fitness.is_some_and(|t| best_overall.fitness() >= t) {
                let best_fitness = best_overall.fitness();
                info!(generations, best_fitness, "target fitness reached");
                return Ok(GaResult {
                    best: best_overall,
                    best_fitness,
                    generations,
                    reached_target: true,
                    fitness_history,
                });
            }

            if generations == config.max_generations {
                break;
            }

            population = next_generation(&population, config, rng)?;
            generations += 1;
        }

        let best_fitness = best_overall.fitness();
        info!(generations, best_fitness, "generation limit reached");
        Ok(GaResult {
            best: best_overall,
            best_fitness,
            generations,
            reached_target: false,
            fitness_history,
        })
    }
}

fn current_best<C: Chromosome>(population: &[C]) -> Result<C, GaError> {
    best(population)
        .cloned()
        .ok_or_else(|| GaError::invalid("population is empty"))
}

// ============================================================================
// Tests
// ============================================================================
