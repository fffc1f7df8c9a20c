// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for fanmap combinators
//!
//! Transforms are fail-fast: a call yields either the full output sequence or
//! exactly one [`TransformError`]. Application errors produced by the caller's
//! function are carried verbatim in [`TransformError::Transform`], so they stay
//! distinguishable from cancellation.
//!
//! # Examples
//!
//! ```
//! use fanmap_core::TransformError;
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("bad input")]
//! struct BadInput;
//!
//! let error = TransformError::Transform { index: 3, source: BadInput };
//! assert_eq!(error.index(), Some(3));
//! assert!(!error.is_cancelled());
//! assert_eq!(error.to_string(), "Transform failed at index 3: bad input");
//! ```

/// Error returned by every transform engine.
///
/// `E` is the caller's application error type.
#[derive(Debug, thiserror::Error)]
pub enum TransformError<E> {
    /// The transform function failed for one element
    ///
    /// Only the first observed failure is reported; the others are drained
    /// and discarded.
    #[error("Transform failed at index {index}: {source}")]
    Transform {
        /// Index of the element whose transform failed
        index: usize,
        /// The application error, unchanged
        source: E,
    },

    /// The caller's cancellation token fired before all elements completed
    #[error("Transform cancelled")]
    Cancelled,

    /// The transform function panicked for one element
    #[error("Transform panicked at index {index}: {message}")]
    Panicked {
        /// Index of the element whose transform panicked
        index: usize,
        /// Panic payload rendered as text, when it was a string
        message: String,
    },

    /// A unit ended without reporting a result
    ///
    /// This happens only when the executing runtime drops a spawned unit,
    /// for example while shutting down.
    #[error("Unit for index {index} ended without reporting a result")]
    Abandoned {
        /// Index of the element that never reported
        index: usize,
    },
}

impl<E> TransformError<E> {
    /// Index of the element this error is attributed to, if any.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Transform { index, .. }
            | Self::Panicked { index, .. }
            | Self::Abandoned { index } => Some(*index),
            Self::Cancelled => None,
        }
    }

    /// Check if this error reports cancellation rather than a failure
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Borrow the application error, if this is one
    #[must_use]
    pub const fn source_ref(&self) -> Option<&E> {
        match self {
            Self::Transform { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Take the application error out, if this is one
    pub fn into_source(self) -> Option<E> {
        match self {
            Self::Transform { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Convert the application error type, keeping every other variant
    pub fn map_source<F, E2>(self, f: F) -> TransformError<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Transform { index, source } => TransformError::Transform {
                index,
                source: f(source),
            },
            Self::Cancelled => TransformError::Cancelled,
            Self::Panicked { index, message } => TransformError::Panicked { index, message },
            Self::Abandoned { index } => TransformError::Abandoned { index },
        }
    }
}

/// Errors raised by the list helpers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The operation needs at least one element
    #[error("{operation} called on empty list")]
    Empty {
        /// Name of the failing operation
        operation: &'static str,
    },

    /// The operation needs more elements than the list holds
    #[error("{operation} needs at least {required} elements, got {actual}")]
    TooShort {
        /// Name of the failing operation
        operation: &'static str,
        /// Minimum number of elements
        required: usize,
        /// Number of elements present
        actual: usize,
    },
}

/// Specialized result of a whole-sequence transform
///
/// # Examples
///
/// ```
/// use fanmap_core::TransformResult;
///
/// fn doubled(items: &[i32]) -> TransformResult<i32, std::convert::Infallible> {
///     Ok(items.iter().map(|x| x * 2).collect())
/// }
///
/// assert_eq!(doubled(&[1, 2]).unwrap(), vec![2, 4]);
/// ```
pub type TransformResult<U, E> = Result<Vec<U>, TransformError<E>>;
