use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the dalal workspace.
///
/// Wraps capability mismatches, argument validation errors, provider-tagged
/// failures, not-found conditions, timeouts and export failures.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DalalError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "snapshot").
        capability: String,
    },

    /// Issues with the returned or expected data (missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "snapshot for INFY.NS".
        what: String,
    },

    /// A ticker selection did not resolve to a symbol (empty selection or registry miss).
    #[error("unknown ticker: {input:?}")]
    UnknownTicker {
        /// The raw selection as entered by the user.
        input: String,
    },

    /// All selected providers failed; contains the individual failures.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<DalalError>),

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label (e.g. "snapshot", "history", "news").
        capability: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },

    /// Writing or reading a tabular export failed.
    #[error("export to {path} failed: {msg}")]
    Export {
        /// Destination (or source) path as displayed to the user.
        path: String,
        /// Underlying I/O or format error message.
        msg: String,
    },
}

/// Coarse classification of [`DalalError`] used by presentation code to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Registry lookup miss or empty selection; show nothing rather than failing.
    UnknownTicker,
    /// Network, timeout, rate-limit or other provider-side failure.
    ProviderUnavailable,
    /// The provider answered but an expected field was absent.
    MissingField,
    /// The export destination could not be written.
    ExportFailure,
    /// Caller error (bad argument, unsupported capability).
    Invalid,
}

impl DalalError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `UnknownTicker` error for a raw selection.
    pub fn unknown_ticker(input: impl Into<String>) -> Self {
        Self::UnknownTicker {
            input: input.into(),
        }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Helper: build an `Export` error from a path and any displayable cause.
    pub fn export(path: impl AsRef<std::path::Path>, err: impl std::fmt::Display) -> Self {
        Self::Export {
            path: path.as_ref().display().to_string(),
            msg: err.to_string(),
        }
    }

    /// Classify this error into one of the coarse [`ErrorKind`]s.
    ///
    /// Aggregates are `MissingField` only when every inner failure is a not-found;
    /// any other inner failure makes the provider unavailable.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownTicker { .. } => ErrorKind::UnknownTicker,
            Self::NotFound { .. } | Self::Data(_) => ErrorKind::MissingField,
            Self::Connector { .. } | Self::ProviderTimeout { .. } | Self::RequestTimeout { .. } => {
                ErrorKind::ProviderUnavailable
            }
            Self::AllProvidersFailed(inner) => {
                if !inner.is_empty() && inner.iter().all(|e| e.kind() == ErrorKind::MissingField)
                {
                    ErrorKind::MissingField
                } else {
                    ErrorKind::ProviderUnavailable
                }
            }
            Self::Export { .. } => ErrorKind::ExportFailure,
            Self::Unsupported { .. } | Self::InvalidArg(_) => ErrorKind::Invalid,
        }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Non-actionable errors are those indicating capability absence or a benign
    /// not-found condition. Aggregates are classified based on their contents.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        match self {
            Self::Unsupported { .. } | Self::NotFound { .. } => false,
            Self::AllProvidersFailed(inner) => inner.iter().any(Self::is_actionable),
            _ => true,
        }
    }

    /// Flatten nested `AllProvidersFailed` structures into a plain vector.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllProvidersFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_classifies_provider_failures() {
        assert_eq!(
            DalalError::provider_timeout("yf", "snapshot").kind(),
            ErrorKind::ProviderUnavailable
        );
        assert_eq!(
            DalalError::connector("yf", "rate limit").kind(),
            ErrorKind::ProviderUnavailable
        );
        assert_eq!(
            DalalError::not_found("snapshot for X").kind(),
            ErrorKind::MissingField
        );
        assert_eq!(
            DalalError::unknown_ticker("").kind(),
            ErrorKind::UnknownTicker
        );
        assert_eq!(
            DalalError::export("/nope/out.csv", "permission denied").kind(),
            ErrorKind::ExportFailure
        );
    }

    #[test]
    fn aggregate_kind_depends_on_members() {
        let all_missing = DalalError::AllProvidersFailed(vec![
            DalalError::not_found("a"),
            DalalError::Data("b".into()),
        ]);
        assert_eq!(all_missing.kind(), ErrorKind::MissingField);

        let mixed = DalalError::AllProvidersFailed(vec![
            DalalError::not_found("a"),
            DalalError::provider_timeout("p", "snapshot"),
        ]);
        assert_eq!(mixed.kind(), ErrorKind::ProviderUnavailable);
    }

    #[test]
    fn flatten_unwraps_nested_aggregates() {
        let e = DalalError::AllProvidersFailed(vec![
            DalalError::not_found("a"),
            DalalError::AllProvidersFailed(vec![DalalError::Data("b".into())]),
        ]);
        let flat = e.flatten();
        assert_eq!(flat.len(), 2);
        assert!(!DalalError::unsupported("news").is_actionable());
        assert!(DalalError::Data("x".into()).is_actionable());
    }

    #[test]
    fn export_error_mentions_path() {
        let e = DalalError::export("out/nifty.csv", "disk full");
        assert_eq!(e.to_string(), "export to out/nifty.csv failed: disk full");
    }
}
