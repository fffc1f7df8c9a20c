// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use fanmap_core::TransformError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Shared counter of finished transform invocations.
///
/// Clones share the same count, so one clone can be moved into the transform
/// function while the test keeps another.
#[derive(Debug, Clone, Default)]
pub struct CompletionCounter {
    count: Arc<AtomicUsize>,
}

impl CompletionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn complete(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

/// Delay for element `index` of `len` so that the last element finishes first.
pub fn inverse_delay(index: usize, len: usize, step_ms: u64) -> Duration {
    Duration::from_millis((len - index) as u64 * step_ms)
}

/// Awaits `future`, panicking if it takes longer than `timeout_ms`.
pub async fn assert_completes_within<F>(timeout_ms: u64, future: F) -> F::Output
where
    F: Future,
{
    match timeout(Duration::from_millis(timeout_ms), future).await {
        Ok(output) => output,
        Err(_) => panic!("future did not complete within {timeout_ms}ms"),
    }
}

/// Unwraps an application error, returning the failing index and the error.
///
/// Panics if `result` is `Ok` or holds any other kind of error.
pub fn expect_application_error<U, E>(result: Result<Vec<U>, TransformError<E>>) -> (usize, E)
where
    U: core::fmt::Debug,
    E: core::fmt::Debug,
{
    match result {
        Err(TransformError::Transform { index, source }) => (index, source),
        other => panic!("expected an application error, got {other:?}"),
    }
}
