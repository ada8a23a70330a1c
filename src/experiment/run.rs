//! Run Record - one finalized run, plus the accumulator that builds it

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::literal::{self, Literal};
use crate::record::{self, RecordKind};

use super::GenerationSample;

/// One finalized run of the algorithm: its generation history and the
/// best-solution snapshot logged at the end.
///
/// Immutable once built; fields a log never set keep their defaults
/// (run index 1, zeroed scalars, empty generation history, empty-list
/// individuals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    run_index: i64,
    generations: Vec<GenerationSample>,
    best_value: f64,
    best_value_normalized: f64,
    best_individual: Literal,
    decoded: Literal,
    constraint: f64,
}

impl RunRecord {
    /// Run index as stated by the log.
    ///
    /// Purely informational: the order of runs within an [`ExperimentLog`]
    /// is end-marker order, not run-index order.
    ///
    /// [`ExperimentLog`]: super::ExperimentLog
    #[must_use]
    pub const fn run_index(&self) -> i64 {
        self.run_index
    }

    /// Generation samples in line order.
    #[must_use]
    pub fn generations(&self) -> &[GenerationSample] {
        &self.generations
    }

    /// Best fitness value in problem-domain terms.
    #[must_use]
    pub const fn best_value(&self) -> f64 {
        self.best_value
    }

    /// Best fitness value on the normalized scale.
    #[must_use]
    pub const fn best_value_normalized(&self) -> f64 {
        self.best_value_normalized
    }

    /// Best individual in its raw encoded form.
    #[must_use]
    pub const fn best_individual(&self) -> &Literal {
        &self.best_individual
    }

    /// Best individual decoded to the problem domain.
    #[must_use]
    pub const fn decoded(&self) -> &Literal {
        &self.decoded
    }

    /// Constraint/penalty value of the best individual.
    #[must_use]
    pub const fn constraint(&self) -> f64 {
        self.constraint
    }

    /// Whether the best individual carries a nonzero constraint value.
    #[must_use]
    pub fn has_constraint(&self) -> bool {
        self.constraint != 0.0
    }
}

/// Mutable accumulator for the run currently being read.
///
/// Receives classified run-level payloads via [`apply`](Self::apply) and is
/// frozen into a [`RunRecord`] by [`finish`](Self::finish) when the driver
/// sees the end-of-run marker. The draft itself has no terminal state.
#[derive(Debug, Clone, PartialEq)]
pub struct RunDraft {
    run_index: i64,
    generations: Vec<GenerationSample>,
    best_value: f64,
    best_value_normalized: f64,
    best_individual: Literal,
    decoded: Literal,
    constraint: f64,
}

impl Default for RunDraft {
    fn default() -> Self {
        Self {
            run_index: 1,
            generations: Vec::new(),
            best_value: 0.0,
            best_value_normalized: 0.0,
            best_individual: Literal::default(),
            decoded: Literal::default(),
            constraint: 0.0,
        }
    }
}

impl RunDraft {
    /// Create a fresh draft with default fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one classified run-level record.
    ///
    /// `payload` is the line with its prefix stripped; `raw_line` is kept
    /// only for error context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] on a token-count mismatch, a numeric parse
    /// failure, a malformed list literal, or a record kind that is not
    /// run-level (`ProblemStart`, `Config`, `RunEnd` belong to the driver).
    pub fn apply(&mut self, kind: RecordKind, payload: &str, raw_line: &str) -> Result<()> {
        match kind {
            RecordKind::RunStart => {
                let token = record::single_token(payload)
                    .ok_or_else(|| Error::format(kind, raw_line, "expected a single run index"))?;
                self.run_index = token.parse().map_err(|_| {
                    Error::format(kind, raw_line, format!("invalid run index {token:?}"))
                })?;
            }
            RecordKind::GenerationSample => {
                self.generations.push(parse_generation(kind, payload, raw_line)?);
            }
            RecordKind::BestIndividual => {
                self.best_individual = list_literal(kind, payload, raw_line)?;
            }
            RecordKind::BestIndividualDecoded => {
                self.decoded = list_literal(kind, payload, raw_line)?;
            }
            RecordKind::BestIndividualConstraint => {
                self.constraint = float_token(kind, payload, raw_line)?;
            }
            RecordKind::BestValueDecoded => {
                self.best_value = float_token(kind, payload, raw_line)?;
            }
            RecordKind::BestValueNormalized => {
                self.best_value_normalized = float_token(kind, payload, raw_line)?;
            }
            RecordKind::ProblemStart | RecordKind::Config | RecordKind::RunEnd => {
                return Err(Error::format(kind, raw_line, "not a run-level record"));
            }
        }
        Ok(())
    }

    /// Freeze the draft into an immutable [`RunRecord`].
    #[must_use]
    pub fn finish(self) -> RunRecord {
        RunRecord {
            run_index: self.run_index,
            generations: self.generations,
            best_value: self.best_value,
            best_value_normalized: self.best_value_normalized,
            best_individual: self.best_individual,
            decoded: self.decoded,
            constraint: self.constraint,
        }
    }
}

/// Parse the five-field `State Individual` payload:
/// `generation best_all best_population mean worst`.
///
/// Every field parses as a float; the producer formats the generation
/// number that way, so it is truncated back to an integer here rather
/// than rejected for a fractional part.
fn parse_generation(kind: RecordKind, payload: &str, raw_line: &str) -> Result<GenerationSample> {
    let fields: Vec<&str> = payload.split(' ').collect();
    let &[generation, best_all, best_population, mean, worst] = fields.as_slice() else {
        return Err(Error::format(
            kind,
            raw_line,
            format!("expected 5 fields, got {}", fields.len()),
        ));
    };
    let float = |token: &str| -> Result<f64> {
        token
            .parse()
            .map_err(|_| Error::format(kind, raw_line, format!("invalid float token {token:?}")))
    };
    #[allow(clippy::cast_possible_truncation)]
    let generation = float(generation)? as i64;
    Ok(GenerationSample::new(
        generation,
        float(best_all)?,
        float(best_population)?,
        float(mean)?,
        float(worst)?,
    ))
}

fn float_token(kind: RecordKind, payload: &str, raw_line: &str) -> Result<f64> {
    let token = record::single_token(payload)
        .ok_or_else(|| Error::format(kind, raw_line, "expected a single numeric token"))?;
    token
        .parse()
        .map_err(|_| Error::format(kind, raw_line, format!("invalid float token {token:?}")))
}

fn list_literal(kind: RecordKind, payload: &str, raw_line: &str) -> Result<Literal> {
    literal::parse_list(payload).map_err(|e| Error::format(kind, raw_line, e))
}
