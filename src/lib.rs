//! Domain-agnostic evolutionary optimization engine.
//!
//! Provides a generic Genetic Algorithm built around a single capability
//! contract:
//!
//! - **Chromosome contract**: a candidate solution knows how to create a
//!   random instance of itself, score itself, recombine with another
//!   instance, and mutate.
//! - **Engine**: population generation, elite / tournament /
//!   roulette-wheel selection, and crossover / mutation orchestration,
//!   generic over any chromosome.
//! - **Runner**: the generational replacement loop (elites ++ selected
//!   offspring) with target-fitness and generation-limit termination.
//!
//! # Architecture
//!
//! The engine contains no domain concepts. Problems plug in by
//! implementing [`ga::Chromosome`]; [`problems`] ships two reference
//! implementations (knapsack and a two-variable equation). Randomness is
//! always injected, so every run is reproducible from its seed.

pub mod ga;
pub mod problems;
pub mod random;
