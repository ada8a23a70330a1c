//! # Evolog: Structured Reader for Evolutionary-Algorithm Run Logs
//!
//! Evolog reconstructs the append-only text log emitted by an
//! evolutionary-algorithm runner into a queryable [`ExperimentLog`]:
//! one problem, its configuration, and an ordered list of runs, each
//! with per-generation fitness statistics and a best-solution snapshot.
//!
//! The log is semi-structured: every record is one line tagged with an
//! exact prefix (`INFO - Run: `, `INFO - State Individual: `, ...), and
//! two record kinds embed literal sub-grammars: a JSON configuration
//! object and a bracketed list of integers/floats/booleans. Lines that
//! match no known prefix are ordinary log noise and are skipped.
//!
//! ## Example
//!
//! ```rust
//! use evolog::reader;
//!
//! let log = reader::parse_str(
//!     "INFO - Problem: SAT-3\n\
//!      INFO - Run: 1\n\
//!      INFO - State Individual: 0 10.0 8.0 9.0 5.0\n\
//!      INFO - Best Individual: [1, 0, true]\n\
//!      INFO - Best Individual Value: 10.0\n\
//!      INFO - End Run: 1\n",
//! )?;
//!
//! assert_eq!(log.name(), "SAT-3");
//! assert_eq!(log.runs().len(), 1);
//! assert_eq!(log.runs()[0].generations().len(), 1);
//! # Ok::<(), evolog::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod experiment;
pub mod literal;
pub mod reader;
pub mod record;
pub mod stats;

pub use error::{Error, Result};
pub use experiment::{ExperimentLog, GenerationSample, RunRecord};
pub use literal::Literal;
pub use reader::read_log_file;
pub use record::RecordKind;
