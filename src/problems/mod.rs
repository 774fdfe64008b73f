//! Reference problems.
//!
//! Two small problems that implement [`Chromosome`](crate::ga::Chromosome)
//! and exercise every part of the engine:
//!
//! - [`knapsack`]: binary vector, capacity-constrained value maximization.
//!   Infeasible packings score zero.
//! - [`equation`]: two bounded integers maximizing `6x − x² + 4y − y²`.

pub mod equation;
pub mod knapsack;
