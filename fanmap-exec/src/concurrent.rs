// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fork-join element-wise transform with first-error-wins semantics.

mod collector;

use crate::engine::TransformEngine;
use crate::logging::log_debug;
use crate::runtime::spawn_detached;
use async_trait::async_trait;
use collector::Collector;
use core::any::Any;
use core::future::Future;
use core::panic::AssertUnwindSafe;
use fanmap_core::{CancellationToken, IndexedResult, TransformError};
use futures::channel::mpsc;
use futures::{FutureExt, StreamExt};

/// Applies `f` to every element concurrently, one spawned unit per element.
///
/// # Behavior
///
/// - Each unit runs `f(scope, index, item)` where `scope` is a child of
///   `cancellation_token`.
/// - Units report `(index, outcome)` into a single channel sized to the input,
///   so reporting never blocks.
/// - The first failure (application error or panic) is recorded, `scope` is
///   cancelled so the remaining units can exit early, and every later report is
///   drained and discarded.
/// - The call returns only after every unit has finished, whatever the
///   outcome.
/// - On success, slot `i` of the output holds the result for input `i`
///   regardless of completion order.
///
/// If `cancellation_token` is already cancelled, returns
/// [`TransformError::Cancelled`] without spawning anything, even for empty
/// input. If it is cancelled mid-call, the call still waits for every unit and
/// then returns [`TransformError::Cancelled`] unless a unit failed first.
/// Errors reported after the caller cancelled, typically units bailing out on
/// their token, are drained like any other late report.
/// Units that ignore their token simply run to completion.
///
/// Dropping the returned future cancels `scope`; units already spawned keep
/// running detached until they notice.
///
/// # Errors
///
/// - [`TransformError::Transform`] with the first observed application error
/// - [`TransformError::Panicked`] if a unit panicked first
/// - [`TransformError::Cancelled`] if the caller's token fired first
/// - [`TransformError::Abandoned`] if the runtime dropped a unit before it
///   reported
///
/// # Panics
///
/// With the `runtime-tokio` feature, panics when called outside a tokio runtime.
///
/// # Examples
///
/// ```
/// use fanmap_exec::concurrent;
///
/// # #[tokio::main]
/// # async fn main() {
/// let doubled = concurrent::transform(
///     vec![1, 2, 3, 4],
///     |_token, _index, x: i32| async move { Ok::<_, std::io::Error>(x * 2) },
///     None,
/// )
/// .await
/// .unwrap();
///
/// assert_eq!(doubled, vec![2, 4, 6, 8]);
/// # }
/// ```
///
/// ## First error wins
///
/// ```
/// use fanmap_exec::concurrent;
///
/// # #[tokio::main]
/// # async fn main() {
/// let result = concurrent::transform(
///     0..10,
///     |_token, index, x: u32| async move {
///         if index == 7 {
///             Err(format!("cannot handle {x}"))
///         } else {
///             Ok(x)
///         }
///     },
///     None,
/// )
/// .await;
///
/// let error = result.unwrap_err();
/// assert_eq!(error.index(), Some(7));
/// assert_eq!(error.into_source().as_deref(), Some("cannot handle 7"));
/// # }
/// ```
pub async fn transform<I, T, U, E, F, Fut>(
    items: I,
    f: F,
    cancellation_token: Option<CancellationToken>,
) -> Result<Vec<U>, TransformError<E>>
where
    I: IntoIterator<Item = T>,
    T: Send + 'static,
    U: Send + 'static,
    E: Send + 'static,
    F: Fn(CancellationToken, usize, T) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<U, E>> + Send + 'static,
{
    let caller = cancellation_token.unwrap_or_default();
    if caller.is_cancelled() {
        return Err(TransformError::Cancelled);
    }

    let items: Vec<T> = items.into_iter().collect();
    let len = items.len();
    if len == 0 {
        return Ok(Vec::new());
    }

    let scope = caller.child_token();
    let scope_guard = scope.clone().drop_guard();
    let (report_tx, mut report_rx) = mpsc::channel::<IndexedResult<U, E>>(len);

    log_debug!("concurrent transform: spawning {len} units");
    for (index, item) in items.into_iter().enumerate() {
        let f = f.clone();
        let scope = scope.clone();
        let mut report_tx = report_tx.clone();

        spawn_detached(async move {
            let outcome = AssertUnwindSafe(async move { f(scope, index, item).await })
                .catch_unwind()
                .await;

            let report = match outcome {
                Ok(Ok(value)) => IndexedResult::success(index, value),
                Ok(Err(source)) => IndexedResult::failure(index, source),
                Err(payload) => IndexedResult::panicked(index, panic_message(payload.as_ref())),
            };

            // Capacity covers every unit, so this only fails once the
            // collector has been dropped.
            let _ = report_tx.try_send(report);
        });
    }

    // Only the units hold senders now; the channel closes when the last one ends.
    drop(report_tx);

    let mut collector = Collector::new(len, caller.clone(), scope);
    let mut caller_cancelled = caller.cancelled().fuse();
    loop {
        futures::select! {
            report = report_rx.next() => match report {
                Some(report) => collector.record(report),
                None => break,
            },
            () = caller_cancelled => collector.cancel(),
        }
    }
    log_debug!(
        "concurrent transform: drained {} of {len} reports",
        collector.received()
    );

    // Every unit has finished; cancelling the scope now is a no-op for them.
    drop(scope_guard);
    collector.finish()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}

/// [`TransformEngine`] spawning one unit per element; see [`transform`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcurrentEngine;

#[async_trait]
impl TransformEngine for ConcurrentEngine {
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
        transform(items, f, cancellation_token).await
    }
}
