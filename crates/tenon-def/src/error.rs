//! # Assert Errors — the Fail-Fast Signal
//!
//! Errors returned by the narrowing path. They are deliberately
//! message-only: the fast path stops at the first violation and does not
//! spend time locating it. Callers that need locations and full coverage
//! run the reporting path on the same value and work with
//! [`Failure`](crate::Failure) records instead.

use thiserror::Error;

use crate::definition::{join_literals, Literal};
use crate::kind::Kind;

/// Error returned by [`Validate::assert`](crate::Validate::assert).
///
/// Carries no path and no captured value. `Display` renders the violation
/// message; the structured counterpart of each variant is a
/// [`Failure`](crate::Failure) record from the reporting path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertError {
    /// The value's runtime type does not match the declared kind.
    ///
    /// Missing required object fields surface here with `actual` set to
    /// `"null"`: an absent field and an explicit null are the same
    /// violation.
    #[error("expected {expected}, got {actual}")]
    TypeMismatch {
        /// The declared kind.
        expected: Kind,
        /// The runtime type of the offending value.
        actual: &'static str,
    },

    /// The value is not a member of an enumeration's allowed set.
    #[error("expected one of [{allowed}]")]
    NotInSet {
        /// The allowed literal values, rendered for display.
        allowed: String,
    },

    /// No alternative of a union admitted the value.
    #[error("no union alternative matched: expected {alternatives}, got {actual}")]
    UnionExhausted {
        /// The alternative kinds, rendered for display.
        alternatives: String,
        /// The runtime type of the offending value.
        actual: &'static str,
    },
}

impl AssertError {
    pub(crate) fn type_mismatch(expected: Kind, actual: &'static str) -> Self {
        Self::TypeMismatch { expected, actual }
    }

    pub(crate) fn not_in_set(allowed: &[Literal]) -> Self {
        Self::NotInSet {
            allowed: join_literals(allowed),
        }
    }

    pub(crate) fn union_exhausted<I>(kinds: I, actual: &'static str) -> Self
    where
        I: IntoIterator<Item = Kind>,
    {
        let mut alternatives = kinds
            .into_iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(" | ");
        if alternatives.is_empty() {
            // A union declared with no alternatives admits nothing.
            alternatives.push_str("nothing");
        }
        Self::UnionExhausted {
            alternatives,
            actual,
        }
    }
}
