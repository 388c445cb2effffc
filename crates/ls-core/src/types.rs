use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Result of a single rewrite pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassOutcome {
    /// The pass finished and replaced the current string.
    Completed,
    /// The budget ran out mid-scan; the current string was left untouched.
    Aborted,
}

impl PassOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for PassOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassOutcome::Completed => write!(f, "completed"),
            PassOutcome::Aborted => write!(f, "aborted"),
        }
    }
}

/// Result of a multi-pass iterate call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IterateOutcome {
    /// Passes fully materialized during the call. An aborted pass is never counted.
    pub completed_iterations: usize,
    pub timed_out: bool,
}

/// Output of a full generation run.
#[derive(Debug, Clone, Serialize)]
pub struct Generation {
    /// Final string with the configured suffix appended.
    pub output: String,
    pub requested_iterations: usize,
    pub completed_iterations: usize,
    pub timed_out: bool,
    pub elapsed: Duration,
}

impl Generation {
    /// Number of requested passes that did not run because of the budget.
    pub fn skipped_iterations(&self) -> usize {
        self.requested_iterations.saturating_sub(self.completed_iterations)
    }
}
