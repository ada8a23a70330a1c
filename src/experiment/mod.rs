//! Experiment log schema
//!
//! The reconstructed shape of one logged experiment:
//!
//! ```text
//! ExperimentLog (1) ──< RunRecord (N) ──< GenerationSample (N)
//! ```
//!
//! [`RunRecord`] is immutable once finalized; [`RunDraft`] is the mutable
//! accumulator for the run currently being read, frozen into a record when
//! the end-of-run marker arrives.

mod generation;
mod log;
mod run;

pub use generation::GenerationSample;
pub use log::ExperimentLog;
pub use run::{RunDraft, RunRecord};
