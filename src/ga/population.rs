//! Population construction and inspection.

use super::error::GaError;
use super::types::Chromosome;
use rand::Rng;
use std::fmt;

/// Builds `n` independently constructed chromosomes.
///
/// Each individual comes from its own
/// [`Chromosome::new_random_instance`] call. The result has no particular
/// order.
///
/// # Errors
///
/// - [`GaError::InvalidArgument`] if `n == 0`.
/// - [`GaError::Chromosome`] if the chromosome rejects `config`.
pub fn generate_population<C: Chromosome, R: Rng>(
    n: usize,
    config: &C::Config,
    rng: &mut R,
) -> Result<Vec<C>, GaError> {
    if n == 0 {
        return Err(GaError::invalid("population size must be positive"));
    }

    (0..n)
        .map(|_| C::new_random_instance(config, rng).map_err(GaError::chromosome))
        .collect()
}

/// Returns the individual with the highest fitness.
///
/// Among equal fitness values the earliest individual wins. Returns
/// `None` for an empty population.
pub fn best<C: Chromosome>(population: &[C]) -> Option<&C> {
    population
        .iter()
        .reduce(|best, c| if c.ranks_above(best) { c } else { best })
}

/// Human-readable listing of a population, one `[ i]  <chromosome>` line
/// per individual.
///
/// ```
/// use u_evolve::ga::display_population;
/// use u_evolve::problems::equation::Equation;
///
/// let pop = vec![Equation::new(3, 2), Equation::new(0, 0)];
/// let text = display_population(&pop).to_string();
/// assert!(text.starts_with("[ 0]  x= 3  y= 2"));
/// ```
pub fn display_population<C: fmt::Display>(population: &[C]) -> PopulationDisplay<'_, C> {
    PopulationDisplay(population)
}

/// [`Display`](fmt::Display) adapter returned by [`display_population`].
pub struct PopulationDisplay<'a, C>(&'a [C]);

impl<C: fmt::Display> fmt::Display for PopulationDisplay<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chromosome) in self.0.iter().enumerate() {
            writeln!(f, "[{i:2}]  {chromosome}")?;
        }
        Ok(())
    }
}
