// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Element-wise transform on the caller's thread of control.

use crate::engine::TransformEngine;
use crate::logging::log_info;
use async_trait::async_trait;
use core::future::Future;
use fanmap_core::{CancellationToken, TransformError};

/// Applies `f` to every element in index order and collects the results.
///
/// Elements are visited strictly in order `0..n`. The first `Err` returned by
/// `f` stops the walk: later elements are never passed to `f`, and the error is
/// returned as [`TransformError::Transform`] carrying the failing index. An
/// empty input returns an empty vector without calling `f`.
///
/// # Errors
///
/// Returns [`TransformError::Transform`] with the first application error.
///
/// # Examples
///
/// ```
/// use fanmap_exec::sequential;
///
/// let lengths = sequential::transform(vec!["a", "bb", "ccc"], |_, s| {
///     Ok::<_, std::convert::Infallible>(s.len())
/// })
/// .unwrap();
/// assert_eq!(lengths, vec![1, 2, 3]);
///
/// let parsed = sequential::transform(["1", "x", "3"], |_, s| s.parse::<i32>());
/// assert_eq!(parsed.unwrap_err().index(), Some(1));
/// ```
pub fn transform<I, T, U, E, F>(items: I, mut f: F) -> Result<Vec<U>, TransformError<E>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(usize, T) -> Result<U, E>,
{
    let items = items.into_iter();
    let mut output = Vec::with_capacity(items.size_hint().0);

    for (index, item) in items.enumerate() {
        match f(index, item) {
            Ok(value) => output.push(value),
            Err(source) => return Err(TransformError::Transform { index, source }),
        }
    }

    Ok(output)
}

/// Async counterpart of [`transform`] for engine-shaped functions.
///
/// Each future is awaited to completion on the calling task before the next
/// element is started, so nothing runs concurrently. The token is checked
/// before every element.
///
/// # Errors
///
/// Returns [`TransformError::Cancelled`] if the token is cancelled before an
/// element starts, or [`TransformError::Transform`] with the first application
/// error.
pub async fn transform_async<I, T, U, E, F, Fut>(
    items: I,
    f: F,
    cancellation_token: Option<CancellationToken>,
) -> Result<Vec<U>, TransformError<E>>
where
    I: IntoIterator<Item = T>,
    F: Fn(CancellationToken, usize, T) -> Fut,
    Fut: Future<Output = Result<U, E>>,
{
    let cancellation_token = cancellation_token.unwrap_or_default();
    if cancellation_token.is_cancelled() {
        return Err(TransformError::Cancelled);
    }

    let items = items.into_iter();
    let mut output = Vec::with_capacity(items.size_hint().0);

    for (index, item) in items.enumerate() {
        if cancellation_token.is_cancelled() {
            log_info!("sequential transform: cancelled before index {index}");
            return Err(TransformError::Cancelled);
        }

        match f(cancellation_token.clone(), index, item).await {
            Ok(value) => output.push(value),
            Err(source) => return Err(TransformError::Transform { index, source }),
        }
    }

    Ok(output)
}

/// [`TransformEngine`] running every element one after another on the caller's task.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialEngine;

#[async_trait]
impl TransformEngine for SequentialEngine {
    async fn transform<T, U, E, F, Fut>(
        &self,
        items: Vec<T>,
        f: F,
        cancellation_token: Option<CancellationToken>,
    ) -> Result<Vec<U>, TransformError<E>>
    where
        T: Send + 'static,
        U: Send + 'static,
        E: Send + 'static,
        F: Fn(CancellationToken, usize, T) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = Result<U, E>> + Send + 'static,
    {
        transform_async(items, f, cancellation_token).await
    }
}
