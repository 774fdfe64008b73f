//! Maximizes `f(x, y) = 6x − x² + 4y − y²` over bounded integers.
//!
//! The unconstrained optimum is `f(3, 2) = 13`.

use crate::ga::Chromosome;
use rand::Rng;
use std::fmt;
use std::ops::RangeInclusive;

/// Inclusive bounds for `x` and `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquationConfig {
    /// Admissible values of `x`.
    pub x: RangeInclusive<i64>,
    /// Admissible values of `y`.
    pub y: RangeInclusive<i64>,
}

impl EquationConfig {
    /// Bounds from two inclusive ranges. Emptiness is checked when a
    /// chromosome is drawn from them.
    pub fn new(x: RangeInclusive<i64>, y: RangeInclusive<i64>) -> Self {
        Self { x, y }
    }
}

impl Default for EquationConfig {
    /// `0..=99` for both variables.
    fn default() -> Self {
        Self::new(0..=99, 0..=99)
    }
}

/// Errors raised by [`Equation`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EquationError {
    /// The range for the named variable contains no value.
    #[error("empty bounds for {0}")]
    EmptyBounds(&'static str),
}

/// A candidate `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    x: i64,
    y: i64,
    bounds: Option<EquationConfig>,
}

impl Equation {
    /// An unbounded candidate; mutation only stops at the `i64` limits.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y, bounds: None }
    }

    /// The `x` gene.
    pub fn x(&self) -> i64 {
        self.x
    }

    /// The `y` gene.
    pub fn y(&self) -> i64 {
        self.y
    }

    /// Each term fits in `i128`; only their sum can saturate, and only
    /// when both genes sit near `i64::MIN`.
    fn objective(x: i64, y: i64) -> i128 {
        let (x, y) = (i128::from(x), i128::from(y));
        (x * (6 - x)).saturating_add(y * (4 - y))
    }

    fn clamp(&mut self) {
        if let Some(b) = &self.bounds {
            self.x = self.x.clamp(*b.x.start(), *b.x.end());
            self.y = self.y.clamp(*b.y.start(), *b.y.end());
        }
    }
}

/// Moves `value` by `step`, or by `-step` when that would leave `range`.
/// A single-value range leaves `value` unchanged.
fn step_within(value: i64, step: i64, range: &RangeInclusive<i64>) -> i64 {
    value
        .checked_add(step)
        .filter(|v| range.contains(v))
        .or_else(|| value.checked_sub(step).filter(|v| range.contains(v)))
        .unwrap_or(value)
}

/// Renders `value` with `,` between groups of three digits.
fn group_thousands(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, d) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(d);
    }
    out
}

impl Chromosome for Equation {
    type Config = EquationConfig;
    type Error = EquationError;

    /// `x` and `y` are drawn uniformly from their bounds.
    fn new_random_instance<R: Rng>(
        config: &EquationConfig,
        rng: &mut R,
    ) -> Result<Self, EquationError> {
        if config.x.is_empty() {
            return Err(EquationError::EmptyBounds("x"));
        }
        if config.y.is_empty() {
            return Err(EquationError::EmptyBounds("y"));
        }
        Ok(Self {
            x: rng.random_range(config.x.clone()),
            y: rng.random_range(config.y.clone()),
            bounds: Some(config.clone()),
        })
    }

    fn fitness(&self) -> f64 {
        Self::objective(self.x, self.y) as f64
    }

    /// Exchanges the `x` genes.
    fn crossover<R: Rng>(&mut self, other: &mut Self, _rng: &mut R) -> Result<(), EquationError> {
        std::mem::swap(&mut self.x, &mut other.x);
        self.clamp();
        other.clamp();
        Ok(())
    }

    /// Moves `x` or `y` (equally likely) by one step up or down.
    ///
    /// A step that would cross a bound is taken in the other direction
    /// instead. Unbounded candidates are bounded by the `i64` range.
    fn mutation<R: Rng>(&mut self, rng: &mut R) -> Result<(), EquationError> {
        let step = if rng.random_bool(0.5) { 1 } else { -1 };
        let (x_range, y_range) = match &self.bounds {
            Some(b) => (b.x.clone(), b.y.clone()),
            None => (i64::MIN..=i64::MAX, i64::MIN..=i64::MAX),
        };
        if rng.random_bool(0.5) {
            self.x = step_within(self.x, step, &x_range);
        } else {
            self.y = step_within(self.y, step, &y_range);
        }
        Ok(())
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={:2}  y={:2}  fitness={:>7}",
            self.x,
            self.y,
            group_thousands(Self::objective(self.x, self.y))
        )
    }
}
