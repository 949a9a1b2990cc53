use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DalalError;

/// Exchange-qualified ticker symbol, e.g. `INFY.NS` or `M&M.NS`.
///
/// Symbols are trimmed and upper-cased on construction and may not be empty or
/// contain whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Validate and normalise a raw ticker string.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the input is empty after trimming or contains whitespace.
    pub fn new(raw: &str) -> Result<Self, DalalError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DalalError::InvalidArg("symbol cannot be empty".into()));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DalalError::InvalidArg(format!(
                "symbol '{trimmed}' contains whitespace"
            )));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Borrow the normalised symbol text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exchange suffix after the last `.`, if any (`"NS"` for `INFY.NS`).
    #[must_use]
    pub fn exchange_suffix(&self) -> Option<&str> {
        self.0.rsplit_once('.').map(|(_, s)| s).filter(|s| !s.is_empty())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Symbol {
    type Err = DalalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = DalalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Symbol> for String {
    fn from(s: Symbol) -> Self {
        s.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
