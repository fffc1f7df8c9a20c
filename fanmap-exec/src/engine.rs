// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use core::future::Future;
use fanmap_core::{CancellationToken, TransformError};

/// A strategy for applying an async function to every element of a sequence.
///
/// Implemented by [`SequentialEngine`](crate::SequentialEngine),
/// [`ConcurrentEngine`](crate::ConcurrentEngine) and
/// [`AdaptiveDispatcher`](crate::AdaptiveDispatcher). Anything that honors the
/// contract below can stand in for them, which is how the dispatcher's routing
/// is tested.
///
/// # Contract
///
/// - On success the output has the same length as `items` and slot `i` holds
///   `f(_, i, items[i])`.
/// - On failure exactly one [`TransformError`] is returned and no partial
///   output is observable.
/// - `f` receives a token that is cancelled when the caller's token is, and
///   possibly earlier (for example after a sibling failed).
/// - An already-cancelled `cancellation_token` yields
///   [`TransformError::Cancelled`].
#[async_trait]
pub trait TransformEngine: Send + Sync {
    /// Transform `items` with `f`.
    ///
    /// `cancellation_token` defaults to a token that never cancels.
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
        Fut: Future<Output = Result<U, E>> + Send + 'static;
}
