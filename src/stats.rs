//! Summary statistics over a problem's runs
//!
//! The numbers a results dashboard derives from a finished experiment:
//! mean, spread and range of the normalized best value across runs. Derived
//! read-only from the reconstructed log, never stored back into it.

use serde::{Deserialize, Serialize};

use crate::experiment::RunRecord;

/// Aggregate of `best_value_normalized` across a problem's runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestValueSummary {
    count: usize,
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
}

impl BestValueSummary {
    /// Compute the summary, or `None` for an empty run list.
    #[must_use]
    pub fn from_runs(runs: &[RunRecord]) -> Option<Self> {
        if runs.is_empty() {
            return None;
        }
        let values: Vec<f64> = runs.iter().map(RunRecord::best_value_normalized).collect();
        #[allow(clippy::cast_precision_loss)]
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        // Sample standard deviation; a single run has no spread.
        let std_dev = if values.len() > 1 {
            (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
        } else {
            0.0
        };
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            count: values.len(),
            mean,
            std_dev,
            min,
            max,
        })
    }

    /// Number of runs aggregated.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Mean normalized best value.
    #[must_use]
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation of the normalized best values.
    #[must_use]
    pub const fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Smallest normalized best value.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Largest normalized best value.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }
}
