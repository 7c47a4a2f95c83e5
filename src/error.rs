//! Error type for the fallible combinators
//!
//! Only a handful of operations can fail, and they all fail the same way: the
//! caller handed over an argument that does not meet the operation's input
//! contract. [`PredicateError`] therefore has a single kind.
//!
//! # Example
//!
//! ```
//! use predica::{try_is_empty, PredicateError};
//!
//! let err = try_is_empty((0..10).filter(|n| n % 2 == 0)).unwrap_err();
//! assert!(matches!(err, PredicateError::InvalidArgument { .. }));
//! assert_eq!(err.operation(), "try_is_empty");
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Error returned when an operation receives an argument outside its contract.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PredicateError {
    /// The argument does not satisfy the operation's stated input contract.
    InvalidArgument {
        /// Name of the operation that rejected the argument.
        operation: &'static str,
        /// Human-readable description of what was wrong.
        reason: String,
    },
}

impl PredicateError {
    /// Create an `InvalidArgument` error.
    ///
    /// With the `tracing` feature enabled this also emits a debug event
    /// carrying the same fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use predica::PredicateError;
    ///
    /// let err = PredicateError::invalid_argument("try_instance_of", "empty descriptor");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "invalid argument to try_instance_of: empty descriptor"
    /// );
    /// ```
    pub fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(operation, reason = %reason, "rejected invalid argument");
        PredicateError::InvalidArgument { operation, reason }
    }

    /// Name of the operation that produced this error.
    pub fn operation(&self) -> &'static str {
        match self {
            PredicateError::InvalidArgument { operation, .. } => operation,
        }
    }

    /// Description of why the argument was rejected.
    pub fn reason(&self) -> &str {
        match self {
            PredicateError::InvalidArgument { reason, .. } => reason,
        }
    }
}

impl fmt::Display for PredicateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredicateError::InvalidArgument { operation, reason } => {
                write!(f, "invalid argument to {}: {}", operation, reason)
            }
        }
    }
}

impl StdError for PredicateError {}

/// Result alias for the fallible combinators.
pub type Result<T> = std::result::Result<T, PredicateError>;
