//! Experiment Log - root entity for one reconstructed problem

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::stats::BestValueSummary;

use super::RunRecord;

/// One problem's reconstructed log: name, configuration, and every run
/// finalized by an end-of-run marker, in marker order.
///
/// Read-only to consumers; the reader in [`crate::reader`] is the only
/// writer. Presentation layers may re-derive statistics from the runs but
/// never mutate the log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperimentLog {
    name: String,
    config: Map<String, Value>,
    runs: Vec<RunRecord>,
}

impl ExperimentLog {
    /// Create an empty log (no name, empty config, no runs).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Problem name, empty until a `Problem` record is seen.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Problem configuration mapping, empty until a `Config` record is seen.
    #[must_use]
    pub const fn config(&self) -> &Map<String, Value> {
        &self.config
    }

    /// Finalized runs in end-marker order.
    ///
    /// The order is the order end-of-run markers were observed, independent
    /// of the run indices the log states.
    #[must_use]
    pub fn runs(&self) -> &[RunRecord] {
        &self.runs
    }

    /// Summary statistics over the runs' normalized best values, or `None`
    /// for a log with no finalized runs.
    #[must_use]
    pub fn summary(&self) -> Option<BestValueSummary> {
        BestValueSummary::from_runs(&self.runs)
    }

    /// Start a new problem block: reset the name, clear the config and the
    /// accumulated runs.
    pub(crate) fn begin_problem(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.config = Map::new();
        self.runs.clear();
    }

    /// Overwrite the configuration (last `Config` record wins).
    pub(crate) fn set_config(&mut self, config: Map<String, Value>) {
        self.config = config;
    }

    /// Append a finalized run.
    pub(crate) fn push_run(&mut self, run: RunRecord) {
        self.runs.push(run);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::RunDraft;

    #[test]
    fn test_empty_log() {
        let log = ExperimentLog::new();
        assert_eq!(log.name(), "");
        assert!(log.config().is_empty());
        assert!(log.runs().is_empty());
        assert!(log.summary().is_none());
    }

    #[test]
    fn test_begin_problem_clears_state() {
        let mut log = ExperimentLog::new();
        log.begin_problem("SAT-3");
        log.set_config(serde_json::json!({"runs": 5}).as_object().unwrap().clone());
        log.push_run(RunDraft::new().finish());

        log.begin_problem("RADIO");
        assert_eq!(log.name(), "RADIO");
        assert!(log.config().is_empty());
        assert!(log.runs().is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut log = ExperimentLog::new();
        log.begin_problem("SAT-3");
        log.push_run(RunDraft::new().finish());

        let json = serde_json::to_string(&log).unwrap();
        let back: ExperimentLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
