//! Generation Sample - per-generation population fitness statistics

use serde::{Deserialize, Serialize};

/// One generation's fitness snapshot within a run.
///
/// Samples are appended in line order; generation numbers come from the
/// producer and are not validated for monotonicity here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationSample {
    generation: i64,
    best_all: f64,
    best_population: f64,
    mean: f64,
    worst: f64,
}

impl GenerationSample {
    /// Create a new generation sample.
    #[must_use]
    pub const fn new(
        generation: i64,
        best_all: f64,
        best_population: f64,
        mean: f64,
        worst: f64,
    ) -> Self {
        Self {
            generation,
            best_all,
            best_population,
            mean,
            worst,
        }
    }

    /// Generation number as stated by the log.
    #[must_use]
    pub const fn generation(&self) -> i64 {
        self.generation
    }

    /// Best fitness seen so far across the whole run.
    #[must_use]
    pub const fn best_all(&self) -> f64 {
        self.best_all
    }

    /// Best fitness within the current population.
    #[must_use]
    pub const fn best_population(&self) -> f64 {
        self.best_population
    }

    /// Mean population fitness.
    #[must_use]
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// Worst population fitness.
    #[must_use]
    pub const fn worst(&self) -> f64 {
        self.worst
    }
}
