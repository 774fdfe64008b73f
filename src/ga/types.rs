//! The chromosome capability contract.
//!
//! [`Chromosome`] is the only thing the engine knows about a problem.
//! Every engine function is generic over it.

use rand::Rng;
use std::cmp::Ordering;

/// A candidate solution the engine can evolve.
///
/// Implementors own their genetic content. Fitness is **maximized**:
/// a higher value ranks above a lower one.
///
/// # Independent copies
///
/// `Clone` is the duplication operation. Tournament and roulette-wheel
/// selection may pick the same individual for several result slots, and
/// each slot receives its own clone so later crossover or mutation on one
/// slot never reaches another. A clone must therefore not share mutable
/// state with its original; immutable shared data (an `Arc` item table,
/// say) is fine.
///
/// # Implementing
///
/// ```
/// use rand::Rng;
/// use u_evolve::ga::Chromosome;
///
/// #[derive(Clone, Debug)]
/// struct Bits(Vec<bool>);
///
/// impl Chromosome for Bits {
///     type Config = usize;
///     type Error = std::convert::Infallible;
///
///     fn new_random_instance<R: Rng>(len: &usize, rng: &mut R) -> Result<Self, Self::Error> {
///         Ok(Bits((0..*len).map(|_| rng.random_bool(0.5)).collect()))
///     }
///
///     fn fitness(&self) -> f64 {
///         self.0.iter().filter(|&&b| b).count() as f64
///     }
///
///     fn crossover<R: Rng>(&mut self, other: &mut Self, _rng: &mut R) -> Result<(), Self::Error> {
///         let mid = self.0.len() / 2;
///         self.0[mid..].swap_with_slice(&mut other.0[mid..]);
///         Ok(())
///     }
///
///     fn mutation<R: Rng>(&mut self, rng: &mut R) -> Result<(), Self::Error> {
///         let i = rng.random_range(0..self.0.len());
///         self.0[i] = !self.0[i];
///         Ok(())
///     }
/// }
/// ```
pub trait Chromosome: Clone {
    /// Problem parameters consumed by [`new_random_instance`](Self::new_random_instance).
    ///
    /// The engine passes it through without inspecting it.
    type Config;

    /// Error reported when the contract cannot be fulfilled, e.g. a
    /// configuration that admits no valid instance.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds one chromosome with random genetic content constrained by
    /// `config`.
    ///
    /// Each call returns a value independent of every other call.
    fn new_random_instance<R: Rng>(config: &Self::Config, rng: &mut R)
        -> Result<Self, Self::Error>;

    /// Returns the fitness of the current state. Must be finite.
    ///
    /// Pure: repeated calls without intervening mutation return the same
    /// value. Infeasible solutions must score at or below every feasible
    /// solution.
    fn fitness(&self) -> f64;

    /// Exchanges a region of genetic content between `self` and `other`,
    /// mutating both in place.
    ///
    /// Both keep their representation shape. The borrow rules guarantee
    /// `self` and `other` are distinct values.
    fn crossover<R: Rng>(&mut self, other: &mut Self, rng: &mut R) -> Result<(), Self::Error>;

    /// Perturbs one randomly chosen locus in place, keeping the shape.
    fn mutation<R: Rng>(&mut self, rng: &mut R) -> Result<(), Self::Error>;

    /// Total order by fitness (ascending), using [`f64::total_cmp`].
    fn cmp_fitness(&self, other: &Self) -> Ordering {
        self.fitness().total_cmp(&other.fitness())
    }

    /// Returns `true` iff `self.fitness() > other.fitness()`.
    fn ranks_above(&self, other: &Self) -> bool {
        self.fitness() > other.fitness()
    }
}
