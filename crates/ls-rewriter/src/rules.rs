//! Rule table: symbol to replacement mapping with identity fallback.

use ls_core::{LsError, Result, RuleSpec};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static RE_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\S+?)\s*(?:->|=)\s*(.*?)\s*$").unwrap());

/// Replacement rules applied uniformly on every pass.
///
/// Symbols without an entry rewrite to themselves. Inserting a symbol that is
/// already present overwrites the previous replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: BTreeMap<char, String>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, returning the replacement it overwrote, if any.
    pub fn insert(&mut self, symbol: char, replacement: impl Into<String>) -> Option<String> {
        let replacement = replacement.into();
        let previous = self.rules.insert(symbol, replacement);
        if let Some(old) = &previous {
            tracing::debug!(%symbol, previous = %old, "rule overwritten");
        }
        previous
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (symbol, replacement) in pairs {
            table.insert(symbol, replacement);
        }
        table
    }

    pub fn from_specs(specs: &[RuleSpec]) -> Self {
        Self::from_pairs(specs.iter().map(|r| (r.symbol, r.replacement.as_str())))
    }

    /// Build from two index-aligned lists of symbols and replacements.
    pub fn from_parallel<S: AsRef<str>>(symbols: &[char], replacements: &[S]) -> Result<Self> {
        if symbols.len() != replacements.len() {
            return Err(LsError::RuleArityMismatch {
                symbols: symbols.len(),
                replacements: replacements.len(),
            });
        }
        Ok(Self::from_pairs(
            symbols.iter().copied().zip(replacements.iter().map(|r| r.as_ref())),
        ))
    }

    /// Parse rules written as `A -> AB; B -> A`.
    ///
    /// Entries are separated by `;` or newlines, the arrow may be `->` or `=`,
    /// and the replacement may be empty.
    pub fn parse(text: &str) -> Result<Self> {
        let mut table = Self::new();
        for entry in text.split(|c: char| c == ';' || c == '\n') {
            if entry.trim().is_empty() {
                continue;
            }
            let caps = RE_RULE.captures(entry).ok_or_else(|| LsError::InvalidRule {
                line: entry.trim().to_string(),
                reason: "expected `symbol -> replacement`".into(),
            })?;
            let mut lhs = caps[1].chars();
            let symbol = match (lhs.next(), lhs.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(LsError::InvalidRule {
                        line: entry.trim().to_string(),
                        reason: format!("left side {:?} must be a single symbol", &caps[1]),
                    })
                }
            };
            table.insert(symbol, &caps[2]);
        }
        Ok(table)
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    /// Append the rewrite of `symbol` to `out`.
    #[inline]
    pub fn apply(&self, symbol: char, out: &mut String) {
        match self.rules.get(&symbol) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(symbol),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.rules.iter().map(|(c, r)| (*c, r.as_str()))
    }

    /// True when no rule shrinks its symbol, so string length never decreases.
    pub fn is_non_contracting(&self) -> bool {
        self.rules.values().all(|r| !r.is_empty())
    }

    pub fn to_specs(&self) -> Vec<RuleSpec> {
        self.iter().map(|(c, r)| RuleSpec::new(c, r)).collect()
    }
}

impl FromStr for RuleTable {
    type Err = LsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<S: Into<String>> FromIterator<(char, S)> for RuleTable {
    fn from_iter<I: IntoIterator<Item = (char, S)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<S: Into<String>> Extend<(char, S)> for RuleTable {
    fn extend<I: IntoIterator<Item = (char, S)>>(&mut self, iter: I) {
        for (symbol, replacement) in iter {
            self.insert(symbol, replacement);
        }
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (symbol, replacement)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{symbol} -> {replacement}")?;
        }
        Ok(())
    }
}
