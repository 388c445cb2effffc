//! The rewriter: owns the symbol string and runs bounded rewrite passes.

use crate::budget;
use crate::clock::{Clock, Stopwatch, SystemClock};
use crate::rules::RuleTable;
use ls_core::{IterateOutcome, PassOutcome};
use std::time::Duration;
use tracing::debug;

/// Rewrites a string in place, one full pass at a time.
///
/// The current string only ever holds a fully materialized generation: a pass
/// that runs out of budget discards its partial output.
#[derive(Debug)]
pub struct Rewriter<C: Clock = SystemClock> {
    current: String,
    rules: RuleTable,
    completed: usize,
    clock: C,
}

impl Rewriter<SystemClock> {
    pub fn new(axiom: impl Into<String>, rules: RuleTable) -> Self {
        Self::with_clock(axiom, rules, SystemClock::new())
    }
}

impl<C: Clock> Rewriter<C> {
    pub fn with_clock(axiom: impl Into<String>, rules: RuleTable, clock: C) -> Self {
        Self {
            current: axiom.into(),
            rules,
            completed: 0,
            clock,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Passes completed since construction, across all calls.
    pub fn completed_iterations(&self) -> usize {
        self.completed
    }

    pub fn into_string(self) -> String {
        self.current
    }

    /// Run one left-to-right pass over the current string.
    ///
    /// Elapsed time is sampled after each symbol is rewritten. If it exceeds
    /// `deadline` the pass aborts and the current string is left unchanged.
    /// `None` runs the pass to completion.
    pub fn single_pass(&mut self, deadline: Option<Duration>) -> PassOutcome {
        let watch = Stopwatch::start(&self.clock);
        let mut next = String::with_capacity(self.current.len());

        for symbol in self.current.chars() {
            self.rules.apply(symbol, &mut next);
            if let Some(limit) = deadline {
                let elapsed = watch.elapsed(&self.clock);
                if budget::is_exceeded(limit, elapsed) {
                    debug!(
                        pass = self.completed + 1,
                        scanned = next.len(),
                        limit_secs = limit.as_secs_f64(),
                        "rewrite pass aborted"
                    );
                    return PassOutcome::Aborted;
                }
            }
        }

        self.current = next;
        self.completed += 1;
        debug!(pass = self.completed, len = self.current.len(), "rewrite pass completed");
        PassOutcome::Completed
    }

    /// Run up to `iterations` passes under a cumulative budget.
    ///
    /// Each pass is handed whatever is left of `total_deadline`. The first
    /// aborted pass ends the call with `timed_out` set; the string then holds
    /// the result of the last completed pass.
    pub fn iterate(&mut self, iterations: usize, total_deadline: Option<Duration>) -> IterateOutcome {
        let watch = Stopwatch::start(&self.clock);

        for i in 0..iterations {
            let remaining = total_deadline.map(|total| budget::remaining(total, watch.elapsed(&self.clock)));
            if !self.single_pass(remaining).is_completed() {
                debug!(completed = i, requested = iterations, "iterate stopped on budget");
                return IterateOutcome {
                    completed_iterations: i,
                    timed_out: true,
                };
            }
        }

        IterateOutcome {
            completed_iterations: iterations,
            timed_out: false,
        }
    }
}
