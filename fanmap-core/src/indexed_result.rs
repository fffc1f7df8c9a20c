// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::TransformError;

/// The outcome of transforming one element, tagged with the element's index.
///
/// Concurrent units complete in arbitrary order; the index lets the collector
/// put each result back in its input position.
#[derive(Debug)]
pub struct IndexedResult<U, E> {
    pub index: usize,
    pub outcome: Result<U, TransformError<E>>,
}

impl<U, E> IndexedResult<U, E> {
    #[must_use]
    pub const fn new(index: usize, outcome: Result<U, TransformError<E>>) -> Self {
        Self { index, outcome }
    }

    /// A successful result for `index`.
    #[must_use]
    pub const fn success(index: usize, value: U) -> Self {
        Self::new(index, Ok(value))
    }

    /// An application failure for `index`.
    #[must_use]
    pub const fn failure(index: usize, source: E) -> Self {
        Self::new(index, Err(TransformError::Transform { index, source }))
    }

    /// A panic observed while transforming `index`.
    #[must_use]
    pub fn panicked(index: usize, message: impl Into<String>) -> Self {
        Self::new(
            index,
            Err(TransformError::Panicked {
                index,
                message: message.into(),
            }),
        )
    }

    pub const fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}
