use crate::rules::RuleKind;
use std::num::ParseIntError;
use thiserror::Error;

/// Why a single range token was rejected by the parser.
///
/// These never abort a scan: the parser turns them into
/// [`SkippedToken`](crate::types::SkippedToken)s and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeParseError {
    #[error("range '{token}' must have exactly two endpoints separated by '-', found {parts} part(s)")]
    Shape { token: String, parts: usize },

    #[error("range '{token}' has a non-numeric endpoint '{endpoint}': {source}")]
    Endpoint {
        token: String,
        endpoint: String,
        #[source]
        source: ParseIntError,
    },
}

impl RangeParseError {
    /// The offending token, trimmed.
    pub fn token(&self) -> &str {
        match self {
            Self::Shape { token, .. } | Self::Endpoint { token, .. } => token,
        }
    }
}

/// Unrecoverable failures while accumulating totals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("sum of {rule} IDs exceeded the 64-bit range")]
    Overflow { rule: RuleKind },
}
