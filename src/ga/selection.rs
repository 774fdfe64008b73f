//! Selection strategies.
//!
//! Each strategy reads a source population and returns a **new**
//! population of the requested size. The source is never modified.
//!
//! - [`elite_selection`]: deterministic top-`n`, sorted best first.
//! - [`tournament_selection`]: best of `k` distinct random participants,
//!   repeated `n` times.
//! - [`roulette_wheel_selection`]: fitness-proportionate draws with
//!   replacement.
//!
//! Tournament and roulette-wheel selection can pick the same source
//! individual more than once; every pick is a separate clone.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::error::GaError;
use super::types::Chromosome;
use rand::distr::weighted::{Error as WeightError, WeightedIndex};
use rand::distr::Distribution;
use rand::seq::index;
use rand::Rng;

/// Strategy used to fill the non-elite part of a generation.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::Selection;
///
/// // Best of 3 random participants per pick
/// let sel = Selection::Tournament(3);
///
/// // Fitness-proportionate
/// let sel = Selection::RouletteWheel;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection with the given tournament size.
    ///
    /// Larger tournaments raise selection pressure; a size equal to the
    /// population always returns the best individual.
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Sensitive to fitness scaling: one dominant individual can take
    /// over the population quickly.
    RouletteWheel,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Selects `n` independent copies from `population` with this strategy.
    pub fn select<C: Chromosome, R: Rng>(
        &self,
        n: usize,
        population: &[C],
        rng: &mut R,
    ) -> Result<Vec<C>, GaError> {
        match *self {
            Selection::Tournament(k) => tournament_selection(n, population, k, rng),
            Selection::RouletteWheel => roulette_wheel_selection(n, population, rng),
        }
    }

    /// Checks the strategy's own parameters against a population size.
    pub(crate) fn validate(&self, population_size: usize) -> Result<(), GaError> {
        match *self {
            Selection::Tournament(k) => check_tournament_size(k, population_size),
            Selection::RouletteWheel => Ok(()),
        }
    }
}

/// Returns the `n` fittest individuals, best first.
///
/// Sorting is stable: individuals with equal fitness keep their relative
/// order from `population`. Deterministic, no randomness involved.
///
/// # Errors
///
/// [`GaError::InvalidArgument`] if `n > population.len()`.
pub fn elite_selection<C: Chromosome>(n: usize, population: &[C]) -> Result<Vec<C>, GaError> {
    if n > population.len() {
        return Err(GaError::invalid(format!(
            "cannot select {n} elites from a population of {}",
            population.len()
        )));
    }

    let mut ranked: Vec<(usize, f64)> = population
        .iter()
        .map(|c| c.fitness())
        .enumerate()
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    Ok(ranked
        .into_iter()
        .take(n)
        .map(|(i, _)| population[i].clone())
        .collect())
}

/// Runs `n` tournaments of `tournament_size` participants each.
///
/// Every tournament samples distinct participants uniformly from the whole
/// population, independently of earlier tournaments, and keeps a clone of
/// the fittest. Among equal fitness the participant drawn first wins.
///
/// # Errors
///
/// [`GaError::InvalidArgument`] if `tournament_size` is zero or larger
/// than the population.
pub fn tournament_selection<C: Chromosome, R: Rng>(
    n: usize,
    population: &[C],
    tournament_size: usize,
    rng: &mut R,
) -> Result<Vec<C>, GaError> {
    check_tournament_size(tournament_size, population.len())?;

    let mut selected = Vec::with_capacity(n);
    for _ in 0..n {
        let winner = tournament(population, tournament_size, rng);
        selected.push(population[winner].clone());
    }
    Ok(selected)
}

/// One tournament: index of the fittest among `k` distinct random picks.
fn tournament<C: Chromosome, R: Rng>(population: &[C], k: usize, rng: &mut R) -> usize {
    let mut participants = index::sample(rng, population.len(), k).into_iter();
    // k >= 1 is checked by the caller
    let mut best_idx = participants.next().unwrap_or(0);
    for idx in participants {
        if population[idx].ranks_above(&population[best_idx]) {
            best_idx = idx;
        }
    }
    best_idx
}

fn check_tournament_size(k: usize, population_size: usize) -> Result<(), GaError> {
    if k == 0 {
        return Err(GaError::invalid("tournament size must be positive"));
    }
    if k > population_size {
        return Err(GaError::invalid(format!(
            "tournament size {k} exceeds population size {population_size}"
        )));
    }
    Ok(())
}

/// Draws `n` individuals with replacement, proportionally to fitness.
///
/// Weights are `fitness_i + offset` where `offset` lifts the lowest
/// fitness to zero when it is negative and is zero otherwise (see
/// [`roulette_weights`]).
///
/// # Errors
///
/// - [`GaError::InvalidArgument`] if the population is empty or a weight
///   is not finite.
/// - [`GaError::DegenerateWeights`] if every weight is zero.
pub fn roulette_wheel_selection<C: Chromosome, R: Rng>(
    n: usize,
    population: &[C],
    rng: &mut R,
) -> Result<Vec<C>, GaError> {
    if population.is_empty() {
        return Err(GaError::invalid(
            "roulette-wheel selection needs a non-empty population",
        ));
    }

    let weights = roulette_weights(population);
    if let Some(w) = weights.iter().find(|w| !w.is_finite()) {
        return Err(GaError::invalid(format!("roulette weight must be finite, got {w}")));
    }
    let wheel = WeightedIndex::new(&weights).map_err(|e| match e {
        WeightError::InsufficientNonZero => {
            tracing::trace!(population_size = population.len(), "all roulette weights are zero");
            GaError::DegenerateWeights {
                population_size: population.len(),
            }
        }
        other => GaError::invalid(format!("invalid roulette weights: {other}")),
    })?;

    Ok((0..n)
        .map(|_| population[wheel.sample(rng)].clone())
        .collect())
}

/// Offset-normalized roulette weights.
///
/// `offset = max(0, -min fitness)`, so the weakest individual of a
/// population with negative fitness gets weight zero and an all
/// non-negative population is weighted by raw fitness.
pub fn roulette_weights<C: Chromosome>(population: &[C]) -> Vec<f64> {
    let fitness: Vec<f64> = population.iter().map(|c| c.fitness()).collect();
    let min = fitness.iter().copied().fold(f64::INFINITY, f64::min);
    let offset = if min < 0.0 { -min } else { 0.0 };
    fitness.into_iter().map(|f| f + offset).collect()
}
