//! Genetic operator orchestration.
//!
//! These functions decide *which* individuals undergo crossover and
//! mutation; *how* genetic content changes is up to the
//! [`Chromosome`] implementation.
//!
//! - [`crossover`]: shuffle, then pair the population from both ends
//!   inward and recombine each pair with a given probability.
//! - [`mutation`]: mutate each individual with a given probability.
//!
//! Both work in place. A chromosome error aborts the pass and leaves the
//! individuals already processed in their new state.

use super::error::{check_probability, GaError};
use super::types::Chromosome;
use rand::seq::SliceRandom;
use rand::Rng;

/// Recombines random pairs of `population` in place.
///
/// The population is shuffled first so that slot order carries no bias.
/// Index `i` is then paired with index `len - 1 - i` for `i < len / 2`;
/// with an odd length the middle individual stays unpaired. Each pair
/// undergoes [`Chromosome::crossover`] with independent probability
/// `probability`.
///
/// # Errors
///
/// - [`GaError::InvalidArgument`] if `probability` is outside `[0, 1]`
///   (the population is left untouched).
/// - [`GaError::Chromosome`] if a pair's crossover fails.
pub fn crossover<C: Chromosome, R: Rng>(
    population: &mut [C],
    probability: f64,
    rng: &mut R,
) -> Result<(), GaError> {
    check_probability("crossover probability", probability)?;

    population.shuffle(rng);

    let len = population.len();
    for i in 0..len / 2 {
        if rng.random_range(0.0..1.0) < probability {
            let j = len - 1 - i;
            let (left, right) = population.split_at_mut(j);
            left[i]
                .crossover(&mut right[0], rng)
                .map_err(GaError::chromosome)?;
        }
    }
    Ok(())
}

/// Mutates each individual of `population` in place with independent
/// probability `probability`.
///
/// # Errors
///
/// - [`GaError::InvalidArgument`] if `probability` is outside `[0, 1]`.
/// - [`GaError::Chromosome`] if a mutation fails.
pub fn mutation<C: Chromosome, R: Rng>(
    population: &mut [C],
    probability: f64,
    rng: &mut R,
) -> Result<(), GaError> {
    check_probability("mutation probability", probability)?;

    for chromosome in population.iter_mut() {
        if rng.random_range(0.0..1.0) < probability {
            chromosome.mutation(rng).map_err(GaError::chromosome)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    /// Tracks which partners an individual was crossed with.
    #[derive(Clone, Debug)]
    struct Tagged {
        id: usize,
        partners: Vec<usize>,
        mutations: usize,
        fail: bool,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("operator failure on {0}")]
    struct OpFailure(usize);

    impl Tagged {
        fn new(id: usize) -> Self {
            Tagged {
                id,
                partners: Vec::new(),
                mutations: 0,
                fail: false,
            }
        }
    }

    impl Chromosome for Tagged {
        type Config = ();
        type Error = OpFailure;

        fn new_random_instance<R: Rng>(_: &(), _rng: &mut R) -> Result<Self, OpFailure> {
            Ok(Tagged::new(0))
        }

        fn fitness(&self) -> f64 {
            self.id as f64
        }

        fn crossover<R: Rng>(&mut self, other: &mut Self, _rng: &mut R) -> Result<(), OpFailure> {
            if self.fail || other.fail {
                return Err(OpFailure(self.id));
            }
            self.partners.push(other.id);
            other.partners.push(self.id);
            Ok(())
        }

        fn mutation<R: Rng>(&mut self, _rng: &mut R) -> Result<(), OpFailure> {
            if self.fail {
                return Err(OpFailure(self.id));
            }
            self.mutations += 1;
            Ok(())
        }
    }

    fn population(n: usize) -> Vec<Tagged> {
        (0..n).map(Tagged::new).collect()
    }

    #[test]
    fn test_crossover_pairs_ends_inward() {
        let mut pop = population(6);
        let mut rng = create_rng(42);
        crossover(&mut pop, 1.0, &mut rng).unwrap();

        // After the shuffle, slot i must be paired with slot len-1-i.
        for i in 0..3 {
            let j = 5 - i;
            assert_eq!(pop[i].partners, vec![pop[j].id]);
            assert_eq!(pop[j].partners, vec![pop[i].id]);
        }
    }

    #[test]
    fn test_crossover_odd_middle_unpaired() {
        let mut pop = population(7);
        let mut rng = create_rng(1);
        crossover(&mut pop, 1.0, &mut rng).unwrap();

        assert!(pop[3].partners.is_empty());
        let paired = pop.iter().filter(|c| c.partners.len() == 1).count();
        assert_eq!(paired, 6);
    }

    #[test]
    fn test_crossover_keeps_population_members() {
        let mut pop = population(9);
        let mut rng = create_rng(2);
        crossover(&mut pop, 0.5, &mut rng).unwrap();

        let mut ids: Vec<usize> = pop.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_crossover_probability_zero() {
        let mut pop = population(10);
        let mut rng = create_rng(3);
        crossover(&mut pop, 0.0, &mut rng).unwrap();
        assert!(pop.iter().all(|c| c.partners.is_empty()));
    }

    #[test]
    fn test_crossover_probability_rate() {
        let mut rng = create_rng(4);
        let mut crossed = 0usize;
        let rounds = 2_000;
        for _ in 0..rounds {
            let mut pop = population(2);
            crossover(&mut pop, 0.3, &mut rng).unwrap();
            crossed += pop[0].partners.len();
        }
        let rate = crossed as f64 / rounds as f64;
        assert!((rate - 0.3).abs() < 0.05, "expected ~0.3, got {rate}");
    }

    #[test]
    fn test_crossover_tiny_populations() {
        let mut rng = create_rng(5);
        let mut empty: Vec<Tagged> = Vec::new();
        crossover(&mut empty, 1.0, &mut rng).unwrap();

        let mut single = population(1);
        crossover(&mut single, 1.0, &mut rng).unwrap();
        assert!(single[0].partners.is_empty());
    }

    #[test]
    fn test_crossover_invalid_probability() {
        let mut pop = population(4);
        let mut rng = create_rng(6);
        let err = crossover(&mut pop, 1.5, &mut rng).unwrap_err();
        assert!(matches!(err, GaError::InvalidArgument(_)));
        // Rejected before the shuffle
        assert_eq!(pop.iter().map(|c| c.id).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_crossover_propagates_failure() {
        let mut pop = population(4);
        pop.iter_mut().for_each(|c| c.fail = true);
        let mut rng = create_rng(7);
        let err = crossover(&mut pop, 1.0, &mut rng).unwrap_err();
        assert!(err.chromosome_error::<OpFailure>().is_some());
    }

    #[test]
    fn test_mutation_all() {
        let mut pop = population(5);
        let mut rng = create_rng(8);
        mutation(&mut pop, 1.0, &mut rng).unwrap();
        assert!(pop.iter().all(|c| c.mutations == 1));
    }

    #[test]
    fn test_mutation_none() {
        let mut pop = population(5);
        let mut rng = create_rng(9);
        mutation(&mut pop, 0.0, &mut rng).unwrap();
        assert!(pop.iter().all(|c| c.mutations == 0));
    }

    #[test]
    fn test_mutation_rate() {
        let mut pop = population(10_000);
        let mut rng = create_rng(10);
        mutation(&mut pop, 0.7, &mut rng).unwrap();
        let rate = pop.iter().filter(|c| c.mutations == 1).count() as f64 / 10_000.0;
        assert!((rate - 0.7).abs() < 0.03, "expected ~0.7, got {rate}");
    }

    #[test]
    fn test_mutation_keeps_order() {
        let mut pop = population(6);
        let mut rng = create_rng(11);
        mutation(&mut pop, 0.5, &mut rng).unwrap();
        assert_eq!(
            pop.iter().map(|c| c.id).collect::<Vec<_>>(),
            (0..6).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_mutation_aborts_on_failure() {
        let mut pop = population(4);
        pop[2].fail = true;
        let mut rng = create_rng(12);
        let err = mutation(&mut pop, 1.0, &mut rng).unwrap_err();
        assert!(matches!(err, GaError::Chromosome(_)));
        assert_eq!(pop[0].mutations, 1);
        assert_eq!(pop[1].mutations, 1);
        assert_eq!(pop[3].mutations, 0);
    }

    #[test]
    fn test_mutation_invalid_probability() {
        let mut pop = population(2);
        let mut rng = create_rng(13);
        assert!(matches!(
            mutation(&mut pop, -0.2, &mut rng),
            Err(GaError::InvalidArgument(_))
        ));
    }
}
