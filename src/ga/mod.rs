//! Genetic Algorithm engine.
//!
//! A generic, domain-agnostic GA engine built on one trait. Users define
//! their representation by implementing [`Chromosome`], which specifies
//! how to create, evaluate, recombine, and mutate an individual. The
//! engine functions below run the search loop over any such type.
//!
//! # Engine Operations
//!
//! - [`generate_population`]: `n` random, independent individuals
//! - [`elite_selection`]: top-`n` by fitness, best first
//! - [`tournament_selection`]: best of `k` distinct random participants
//! - [`roulette_wheel_selection`]: fitness-proportionate draws
//! - [`crossover`]: shuffle, pair ends inward, recombine with probability
//! - [`mutation`]: mutate each individual with probability
//!
//! # Key Types
//!
//! - [`GaConfig`]: Generational loop parameters (population, elitism, rates)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Best individual and run statistics
//! - [`GaError`]: Engine and chromosome errors
//!
//! All randomness comes from an explicit `&mut impl Rng` argument; see
//! [`crate::random`] for seeded construction.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod error;
mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use error::GaError;
pub use operators::{crossover, mutation};
pub use population::{best, display_population, generate_population, PopulationDisplay};
pub use runner::{next_generation, GaResult, GaRunner};
pub use selection::{
    elite_selection, roulette_wheel_selection, roulette_weights, tournament_selection, Selection,
};
pub use types::Chromosome;
