//! Error type shared by every engine operation.

use std::error::Error;

/// Errors returned by the GA engine.
///
/// Engine operations validate their arguments before touching any
/// population, so an `InvalidArgument` or `DegenerateWeights` error never
/// leaves partial results behind.
#[derive(Debug, thiserror::Error)]
pub enum GaError {
    /// A count, size, or probability argument is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Every adjusted roulette-wheel weight is zero, so no individual can
    /// be drawn.
    #[error("degenerate roulette weights: all {population_size} adjusted weights are zero")]
    DegenerateWeights {
        /// Size of the population that was offered for selection.
        population_size: usize,
    },

    /// A chromosome implementation reported an error.
    ///
    /// The original error is kept as-is and can be recovered with
    /// [`downcast_ref`](std::error::Error::downcast_ref) on the source.
    #[error(transparent)]
    Chromosome(Box<dyn Error + Send + Sync>),
}

impl GaError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GaError::InvalidArgument(msg.into())
    }

    pub(crate) fn chromosome<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        GaError::Chromosome(Box::new(err))
    }

    /// Returns the chromosome error if this is a [`GaError::Chromosome`]
    /// carrying an `E`.
    pub fn chromosome_error<E: Error + 'static>(&self) -> Option<&E> {
        match self {
            GaError::Chromosome(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}

/// Checks that `p` is a probability in `[0, 1]`.
pub(crate) fn check_probability(name: &str, p: f64) -> Result<(), GaError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(GaError::invalid(format!(
            "{name} must be within [0, 1], got {p}"
        )))
    }
}
