//! Elapsed-time budget arithmetic.

use std::time::Duration;

pub use ls_core::config::budget_from_secs as from_secs;

/// Budget left after `elapsed`, never negative.
pub fn remaining(total: Duration, elapsed: Duration) -> Duration {
    total.saturating_sub(elapsed)
}

/// Strict comparison: a pass that lands exactly on its limit still completes.
pub fn is_exceeded(limit: Duration, elapsed: Duration) -> bool {
    elapsed > limit
}
