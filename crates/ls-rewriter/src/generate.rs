//! One-shot generation from a [`GenerationConfig`].

use crate::clock::{Clock, Stopwatch, SystemClock};
use crate::rewriter::Rewriter;
use crate::rules::RuleTable;
use ls_core::{Generation, GenerationConfig, Result};
use tracing::{info, warn};

/// Run a full generation on the wall clock.
pub fn generate(config: &GenerationConfig) -> Result<Generation> {
    generate_with_clock(config, SystemClock::new())
}

/// Run a full generation: validate, rewrite under the configured budget,
/// then append the suffix.
///
/// A timeout is not an error; the output falls back to the last completed
/// iteration and `timed_out` is set.
pub fn generate_with_clock<C: Clock>(config: &GenerationConfig, clock: C) -> Result<Generation> {
    let requested = config.iteration_count()?;
    let rules = RuleTable::from_specs(&config.rules);
    let mut rewriter = Rewriter::with_clock(config.axiom.as_str(), rules, clock);

    let watch = Stopwatch::start(rewriter.clock());
    let outcome = rewriter.iterate(requested, config.timeout());
    let elapsed = watch.elapsed(rewriter.clock());

    if outcome.timed_out {
        warn!(
            completed = outcome.completed_iterations,
            requested,
            "generation timed out, using previous iteration"
        );
    }

    let mut output = rewriter.into_string();
    output.push_str(&config.suffix);

    info!(
        elapsed_secs = elapsed.as_secs_f64(),
        iterations = outcome.completed_iterations,
        len = output.len(),
        "generation finished"
    );

    Ok(Generation {
        output,
        requested_iterations: requested,
        completed_iterations: outcome.completed_iterations,
        timed_out: outcome.timed_out,
        elapsed,
    })
}
