//! Log reader - folds classified lines into an [`ExperimentLog`]
//!
//! The scan is a single synchronous pass with no lookahead. Problem-level
//! records mutate the log; run-level records mutate the one live
//! [`RunDraft`], which the end-of-run marker freezes into the run list.
//! Parsing the same bytes twice yields structurally equal logs.
//!
//! [`RunDraft`]: crate::experiment::RunDraft

use std::fs;
use std::io;
use std::mem;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::experiment::{ExperimentLog, RunDraft};
use crate::literal;
use crate::record::{self, RecordKind};

/// Read and reconstruct a log file.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the file does not exist, [`Error::Io`]
/// for any other I/O failure, and [`Error::Format`] on the first malformed
/// record payload.
///
/// # Example
///
/// ```rust,no_run
/// let log = evolog::read_log_file("data/outputs/sat-3.log")?;
/// println!("{}: {} runs", log.name(), log.runs().len());
/// # Ok::<(), evolog::Error>(())
/// ```
pub fn read_log_file<P: AsRef<Path>>(path: P) -> Result<ExperimentLog> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            Error::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Io(e)
        }
    })?;
    parse_str(&text)
}

/// Reconstruct a log from in-memory text.
///
/// # Errors
///
/// Returns [`Error::Format`] on the first malformed record payload.
pub fn parse_str(text: &str) -> Result<ExperimentLog> {
    parse_lines(text.lines())
}

/// Reconstruct a log from a sequence of lines.
///
/// Lines outside the record vocabulary are skipped; there is no recovery
/// for malformed records, since consumers assume a fully validated
/// structure. A run still accumulating when the input ends was never
/// finalized by an end marker and is dropped, not appended.
///
/// # Errors
///
/// Returns [`Error::Format`] on the first malformed record payload.
pub fn parse_lines<'a, I>(lines: I) -> Result<ExperimentLog>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut log = ExperimentLog::new();
    let mut draft = RunDraft::new();

    for line in lines {
        let Some((kind, payload)) = RecordKind::classify(line) else {
            trace!(line, "skipping line outside the record vocabulary");
            continue;
        };
        match kind {
            RecordKind::ProblemStart => {
                let name = record::single_token(payload).ok_or_else(|| {
                    Error::format(kind, line, "expected a single problem name")
                })?;
                debug!(problem = name, "starting problem block");
                log.begin_problem(name);
                // The draft in progress survives the problem reset; a later
                // end marker files it under the new problem's run list.
            }
            RecordKind::Config => {
                let config = literal::parse_config(payload)
                    .map_err(|e| Error::format(kind, line, e))?;
                log.set_config(config);
            }
            RecordKind::RunEnd => {
                let run = mem::take(&mut draft).finish();
                debug!(
                    run_index = run.run_index(),
                    generations = run.generations().len(),
                    "finalized run"
                );
                log.push_run(run);
            }
            RecordKind::RunStart
            | RecordKind::GenerationSample
            | RecordKind::BestIndividual
            | RecordKind::BestIndividualDecoded
            | RecordKind::BestIndividualConstraint
            | RecordKind::BestValueDecoded
            | RecordKind::BestValueNormalized => draft.apply(kind, payload, line)?,
        }
    }

    if draft != RunDraft::new() {
        trace!("dropping unfinalized run at end of input");
    }
    Ok(log)
}
