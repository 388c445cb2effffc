//! Shared types for the L-system rewriting workspace.

pub mod config;
pub mod error;
pub mod types;

pub use config::{GenerationConfig, RuleSpec};
pub use error::{LsError, Result};
pub use types::{Generation, IterateOutcome, PassOutcome};
