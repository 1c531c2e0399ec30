//! Weighted categorical draws over a fixed label table.

use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::Rng;

/// A fixed set of labels with draw weights.
#[derive(Debug, Clone)]
pub struct Categorical<T> {
    labels: Vec<T>,
    index: WeightedIndex<f64>,
}

impl<T: Copy> Categorical<T> {
    /// Build a table from labels and their weights.
    ///
    /// Weights need not sum to one; they are normalized by the sampler.
    pub fn weighted(labels: &[T], weights: &[f64]) -> Result<Self, WeightedError> {
        if labels.len() != weights.len() {
            return Err(WeightedError::InvalidWeight);
        }
        Ok(Self {
            labels: labels.to_vec(),
            index: WeightedIndex::new(weights)?,
        })
    }

    /// Build a table where every label is equally likely.
    pub fn uniform(labels: &[T]) -> Result<Self, WeightedError> {
        let weights = vec![1.0; labels.len()];
        Self::weighted(labels, &weights)
    }

    pub fn labels(&self) -> &[T] {
        &self.labels
    }

    /// Draw one label.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> T {
        self.labels[self.index.sample(rng)]
    }
}
