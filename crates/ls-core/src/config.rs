//! Generation configuration.

use crate::error::{LsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// One `symbol -> replacement` rule as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub symbol: char,
    #[serde(default)]
    pub replacement: String,
}

impl RuleSpec {
    pub fn new(symbol: char, replacement: impl Into<String>) -> Self {
        Self { symbol, replacement: replacement.into() }
    }
}

/// Everything needed to run one generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Starting string.
    pub axiom: String,
    /// Appended to the generated string; never rewritten.
    pub suffix: String,
    pub iterations: i64,
    /// Cumulative budget in seconds. `None` or a negative value means unbounded.
    pub timeout_secs: Option<f64>,
    /// Later entries for the same symbol overwrite earlier ones.
    pub rules: Vec<RuleSpec>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            axiom: String::new(),
            suffix: String::new(),
            iterations: 5,
            timeout_secs: Some(100.0),
            rules: Vec::new(),
        }
    }
}

impl GenerationConfig {
    pub fn new(axiom: impl Into<String>) -> Self {
        Self { axiom: axiom.into(), ..Self::default() }
    }

    pub fn with_rule(mut self, symbol: char, replacement: impl Into<String>) -> Self {
        self.rules.push(RuleSpec::new(symbol, replacement));
        self
    }

    pub fn with_iterations(mut self, iterations: i64) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: Option<f64>) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Reject configurations that must not reach the rewriter.
    pub fn validate(&self) -> Result<()> {
        if self.iterations < 0 {
            return Err(LsError::NegativeIterations(self.iterations));
        }
        if self.timeout_secs.is_some_and(f64::is_nan) {
            return Err(LsError::InvalidConfig("timeout_secs is NaN".into()));
        }
        Ok(())
    }

    /// Validated iteration count.
    pub fn iteration_count(&self) -> Result<usize> {
        self.validate()?;
        usize::try_from(self.iterations)
            .map_err(|_| LsError::InvalidConfig(format!("iterations out of range: {}", self.iterations)))
    }

    /// Budget as a duration; `None` when unbounded.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.and_then(budget_from_secs)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded generation config");
        Self::from_json_str(&content)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}

/// Convert a budget in seconds into a duration.
///
/// Negative, NaN and non-representable values mean "unbounded". Zero is a
/// bounded budget that is already spent.
pub fn budget_from_secs(secs: f64) -> Option<Duration> {
    if secs.is_nan() || secs < 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(secs).ok()
}
