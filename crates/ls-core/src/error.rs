use thiserror::Error;

#[derive(Error, Debug)]
pub enum LsError {
    #[error("Iteration count must not be negative, got {0}")]
    NegativeIterations(i64),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid rule {line:?}: {reason}")]
    InvalidRule { line: String, reason: String },
    #[error("Rule list mismatch: {symbols} symbols, {replacements} replacements")]
    RuleArityMismatch { symbols: usize, replacements: usize },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LsError>;
