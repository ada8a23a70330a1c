//! Record kinds and line classification
//!
//! The runner logs through a `{level} - {message}` pattern, so every record
//! the reader cares about starts with one of a fixed set of `INFO - ...`
//! prefixes. Classification is an exact prefix match at position 0; the
//! prefixes are pairwise non-overlapping, so table order does not affect
//! the outcome.

use serde::{Deserialize, Serialize};

/// The closed vocabulary of log records.
///
/// Each line of the log maps to at most one kind. `ProblemStart` and
/// `Config` are problem-level records handled by the driver; `RunEnd`
/// finalizes the run in progress; everything else mutates the current
/// run accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// Start of a problem block; payload is the problem name
    ProblemStart,
    /// Problem configuration; payload is a JSON object
    Config,
    /// Start of a run; payload is the run index
    RunStart,
    /// Per-generation fitness statistics; payload is five numeric tokens
    GenerationSample,
    /// End-of-run marker; freezes the run in progress
    RunEnd,
    /// Best individual in raw encoded form; payload is a list literal
    BestIndividual,
    /// Best individual decoded to the problem domain; payload is a list literal
    BestIndividualDecoded,
    /// Constraint/penalty value of the best individual
    BestIndividualConstraint,
    /// Best fitness value in problem-domain terms
    BestValueDecoded,
    /// Best fitness value on the normalized scale
    BestValueNormalized,
}

/// Classification table: exact line prefix for each record kind.
const PREFIXES: [(&str, RecordKind); 10] = [
    ("INFO - Problem: ", RecordKind::ProblemStart),
    ("INFO - Config: ", RecordKind::Config),
    ("INFO - Run: ", RecordKind::RunStart),
    ("INFO - State Individual: ", RecordKind::GenerationSample),
    ("INFO - End Run: ", RecordKind::RunEnd),
    ("INFO - Best Individual: ", RecordKind::BestIndividual),
    ("INFO - Best Individual Decoded: ", RecordKind::BestIndividualDecoded),
    (
        "INFO - Best Individual Constraint: ",
        RecordKind::BestIndividualConstraint,
    ),
    (
        "INFO - Best Individual Value Decoded: ",
        RecordKind::BestValueDecoded,
    ),
    ("INFO - Best Individual Value: ", RecordKind::BestValueNormalized),
];

impl RecordKind {
    /// Classify a raw log line.
    ///
    /// Returns the record kind and the payload (prefix stripped, surrounding
    /// whitespace trimmed), or `None` for lines outside the log vocabulary.
    /// Unmatched lines are expected in real logs and are not an error.
    #[must_use]
    pub fn classify(line: &str) -> Option<(Self, &str)> {
        PREFIXES
            .iter()
            .find_map(|&(prefix, kind)| line.strip_prefix(prefix).map(|rest| (kind, rest.trim())))
    }

    /// The exact line prefix this kind is recognized by.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::ProblemStart => "INFO - Problem: ",
            Self::Config => "INFO - Config: ",
            Self::RunStart => "INFO - Run: ",
            Self::GenerationSample => "INFO - State Individual: ",
            Self::RunEnd => "INFO - End Run: ",
            Self::BestIndividual => "INFO - Best Individual: ",
            Self::BestIndividualDecoded => "INFO - Best Individual Decoded: ",
            Self::BestIndividualConstraint => "INFO - Best Individual Constraint: ",
            Self::BestValueDecoded => "INFO - Best Individual Value Decoded: ",
            Self::BestValueNormalized => "INFO - Best Individual Value: ",
        }
    }

    /// Short human-readable name, used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProblemStart => "Problem",
            Self::Config => "Config",
            Self::RunStart => "Run",
            Self::GenerationSample => "State Individual",
            Self::RunEnd => "End Run",
            Self::BestIndividual => "Best Individual",
            Self::BestIndividualDecoded => "Best Individual Decoded",
            Self::BestIndividualConstraint => "Best Individual Constraint",
            Self::BestValueDecoded => "Best Individual Value Decoded",
            Self::BestValueNormalized => "Best Individual Value",
        }
    }
}

/// The payload's only token, or `None` if splitting on single spaces does
/// not yield exactly one.
///
/// Payload fields are separated by single spaces in the producer's
/// formatting; an empty payload counts as one empty token, which downstream
/// parsing then rejects where a value is required.
pub(crate) fn single_token(payload: &str) -> Option<&str> {
    let mut tokens = payload.split(' ');
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => Some(token),
        _ => None,
    }
}
