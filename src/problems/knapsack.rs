//! 0/1 knapsack as a binary-vector chromosome.
//!
//! One gene per item: `true` packs the item. A packing whose total
//! capacity exceeds the limit is infeasible and scores zero, otherwise it
//! scores the total value of the packed items.

use crate::ga::Chromosome;
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// An item that can be packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Capacity the item consumes.
    pub capacity: u32,
    /// Value the item contributes.
    pub value: u32,
}

impl Item {
    /// An item consuming `capacity` and worth `value`.
    pub const fn new(capacity: u32, value: u32) -> Self {
        Self { capacity, value }
    }
}

/// The 32-item reference table.
pub const REFERENCE_ITEMS: [Item; 32] = [
    Item::new(52, 16),
    Item::new(5, 54),
    Item::new(21, 57),
    Item::new(54, 4),
    Item::new(26, 44),
    Item::new(22, 83),
    Item::new(87, 87),
    Item::new(59, 14),
    Item::new(67, 28),
    Item::new(77, 43),
    Item::new(60, 9),
    Item::new(88, 89),
    Item::new(64, 6),
    Item::new(49, 54),
    Item::new(23, 77),
    Item::new(3, 34),
    Item::new(71, 21),
    Item::new(31, 36),
    Item::new(67, 49),
    Item::new(2, 34),
    Item::new(99, 11),
    Item::new(93, 65),
    Item::new(83, 9),
    Item::new(76, 42),
    Item::new(48, 32),
    Item::new(36, 99),
    Item::new(5, 93),
    Item::new(15, 15),
    Item::new(75, 49),
    Item::new(50, 92),
    Item::new(5, 85),
    Item::new(85, 57),
];

/// Capacity limit used with [`REFERENCE_ITEMS`].
pub const REFERENCE_CAPACITY_LIMIT: u32 = 1000;

/// Item table and capacity limit.
///
/// The table is shared immutably between all chromosomes built from it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackConfig {
    /// Items in gene order.
    pub items: Arc<[Item]>,
    /// Largest total capacity a feasible packing may use.
    pub capacity_limit: u32,
}

impl KnapsackConfig {
    /// A table of `items` with the given limit.
    pub fn new(items: impl Into<Arc<[Item]>>, capacity_limit: u32) -> Self {
        Self {
            items: items.into(),
            capacity_limit,
        }
    }

    /// The 32-item table with a capacity limit of 1000.
    pub fn reference() -> Self {
        Self::new(REFERENCE_ITEMS.to_vec(), REFERENCE_CAPACITY_LIMIT)
    }
}

/// Errors raised by [`Knapsack`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KnapsackError {
    /// The config has no items, so there is nothing to encode.
    #[error("knapsack item table is empty")]
    EmptyItemTable,

    /// Two gene vectors, or genes and table, differ in length.
    #[error("gene length mismatch: {left} vs {right}")]
    ShapeMismatch { left: usize, right: usize },
}

/// A packing decision over a fixed item table.
#[derive(Debug, Clone, PartialEq)]
pub struct Knapsack {
    genes: Vec<bool>,
    items: Arc<[Item]>,
    capacity_limit: u32,
}

impl Knapsack {
    /// Builds a chromosome with explicit genes.
    ///
    /// # Errors
    ///
    /// [`KnapsackError::EmptyItemTable`] if the table has no items,
    /// [`KnapsackError::ShapeMismatch`] if `genes` and the item table
    /// differ in length.
    pub fn with_genes(genes: Vec<bool>, config: &KnapsackConfig) -> Result<Self, KnapsackError> {
        if config.items.is_empty() {
            return Err(KnapsackError::EmptyItemTable);
        }
        if genes.len() != config.items.len() {
            return Err(KnapsackError::ShapeMismatch {
                left: genes.len(),
                right: config.items.len(),
            });
        }
        Ok(Self {
            genes,
            items: Arc::clone(&config.items),
            capacity_limit: config.capacity_limit,
        })
    }

    /// Packing flags, one per item.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Total `(capacity, value)` of the packed items.
    pub fn gene_expression(&self) -> (u64, u64) {
        self.genes
            .iter()
            .zip(self.items.iter())
            .filter(|(packed, _)| **packed)
            .fold((0, 0), |(c, v), (_, item)| {
                (c + u64::from(item.capacity), v + u64::from(item.value))
            })
    }
}

impl Chromosome for Knapsack {
    type Config = KnapsackConfig;
    type Error = KnapsackError;

    /// Each gene is an independent fair coin flip.
    fn new_random_instance<R: Rng>(
        config: &KnapsackConfig,
        rng: &mut R,
    ) -> Result<Self, KnapsackError> {
        let genes = (0..config.items.len()).map(|_| rng.random_bool(0.5)).collect();
        Self::with_genes(genes, config)
    }

    fn fitness(&self) -> f64 {
        let (capacity, value) = self.gene_expression();
        if capacity > u64::from(self.capacity_limit) {
            0.0
        } else {
            value as f64
        }
    }

    /// Swaps the gene tails starting at the midpoint.
    ///
    /// The split point is fixed, so crossing the same pair twice restores
    /// both.
    fn crossover<R: Rng>(&mut self, other: &mut Self, _rng: &mut R) -> Result<(), KnapsackError> {
        if self.genes.len() != other.genes.len() {
            return Err(KnapsackError::ShapeMismatch {
                left: self.genes.len(),
                right: other.genes.len(),
            });
        }
        let point = self.genes.len() / 2;
        self.genes[point..].swap_with_slice(&mut other.genes[point..]);
        Ok(())
    }

    /// Flips one uniformly chosen bit.
    fn mutation<R: Rng>(&mut self, rng: &mut R) -> Result<(), KnapsackError> {
        let index = rng.random_range(0..self.genes.len());
        self.genes[index] = !self.genes[index];
        Ok(())
    }
}

impl fmt::Display for Knapsack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let genes: String = self
            .genes
            .iter()
            .map(|&b| if b { '1' } else { '0' })
            .collect();
        let (capacity, value) = self.gene_expression();
        write!(
            f,
            "gene={genes}  capacity={capacity:4}  value={value:4}  fitness={:5.0}",
            self.fitness()
        )
    }
}
