//! L-system rewriter — bounded string rewriting with cumulative time budgets.
//!
//! Modules:
//! 1. rules: symbol to replacement table, identity for unmapped symbols
//! 2. clock: wall and deterministic time sources
//! 3. budget: remaining/exceeded arithmetic
//! 4. rewriter: single pass and multi-pass iterate
//! 5. generate: config-driven one-shot generation

pub mod budget;
pub mod clock;
pub mod generate;
pub mod rewriter;
pub mod rules;

pub use clock::{Clock, SteppingClock, Stopwatch, SystemClock};
pub use generate::{generate, generate_with_clock};
pub use rewriter::Rewriter;
pub use rules::RuleTable;

pub use ls_core::{Generation, GenerationConfig, IterateOutcome, LsError, PassOutcome, Result, RuleSpec};
