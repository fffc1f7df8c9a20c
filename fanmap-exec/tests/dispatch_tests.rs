// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use async_trait::async_trait;
use core::future::Future;
use fanmap_core::{CancellationToken, TransformError};
use fanmap_exec::{
    AdaptiveDispatcher, DispatchConfig, Route, SequentialEngine, TransformEngine,
    DEFAULT_THRESHOLD,
};
use fanmap_test_utils::test_data::numbers;
use fanmap_test_utils::{expect_application_error, TestError};
use std::sync::{Arc, Mutex};

/// Engine double that records the lengths it was asked to transform.
#[derive(Debug, Clone, Default)]
struct RecordingEngine {
    calls: Arc<Mutex<Vec<usize>>>,
}

impl RecordingEngine {
    fn calls(&self) -> Vec<usize> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransformEngine for RecordingEngine {
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
        self.calls.lock().unwrap().push(items.len());
        SequentialEngine.transform(items, f, cancellation_token).await
    }
}

fn recording_dispatcher(
    threshold: usize,
) -> (
    AdaptiveDispatcher<RecordingEngine, RecordingEngine>,
    RecordingEngine,
    RecordingEngine,
) {
    let sequential = RecordingEngine::default();
    let concurrent = RecordingEngine::default();
    let dispatcher = AdaptiveDispatcher::with_engines(
        DispatchConfig::new(threshold),
        sequential.clone(),
        concurrent.clone(),
    );
    (dispatcher, sequential, concurrent)
}

#[test]
fn test_default_threshold() {
    let dispatcher: AdaptiveDispatcher = AdaptiveDispatcher::default();

    assert_eq!(DispatchConfig::default().threshold, DEFAULT_THRESHOLD);
    assert_eq!(dispatcher.config(), DispatchConfig::new(100));
}

#[test]
fn test_route_boundaries() {
    let dispatcher = AdaptiveDispatcher::with_threshold(10);

    assert_eq!(dispatcher.route(0), Route::Sequential);
    assert_eq!(dispatcher.route(9), Route::Sequential);
    assert_eq!(dispatcher.route(10), Route::Concurrent);
    assert_eq!(dispatcher.route(10_000), Route::Concurrent);
}

#[test]
fn test_zero_threshold_always_concurrent() {
    let dispatcher = AdaptiveDispatcher::with_threshold(0);

    assert_eq!(dispatcher.route(0), Route::Concurrent);
}

#[tokio::test]
async fn test_short_input_goes_to_sequential_engine() -> anyhow::Result<()> {
    // Arrange
    let (dispatcher, sequential, concurrent) = recording_dispatcher(5);

    // Act
    let output = dispatcher
        .transform(
            numbers(4),
            |_token, _index, x| async move { Ok::<_, TestError>(x + 1) },
            None,
        )
        .await?;

    // Assert
    assert_eq!(output, vec![1, 2, 3, 4]);
    assert_eq!(sequential.calls(), vec![4]);
    assert!(concurrent.calls().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_long_input_goes_to_concurrent_engine() -> anyhow::Result<()> {
    // Arrange
    let (dispatcher, sequential, concurrent) = recording_dispatcher(5);

    // Act
    let output = dispatcher
        .transform(
            numbers(5),
            |_token, _index, x| async move { Ok::<_, TestError>(x) },
            None,
        )
        .await?;

    // Assert
    assert_eq!(output, numbers(5));
    assert!(sequential.calls().is_empty());
    assert_eq!(concurrent.calls(), vec![5]);

    Ok(())
}

#[tokio::test]
async fn test_default_engines_agree_on_both_sides_of_threshold() -> anyhow::Result<()> {
    let dispatcher = AdaptiveDispatcher::with_threshold(8);

    for len in [0, 7, 8, 64] {
        let output = dispatcher
            .transform(
                numbers(len),
                |_token, index, x| async move { Ok::<_, TestError>(x * 10 + index as i64) },
                None,
            )
            .await?;

        let expected: Vec<i64> = (0..len as i64).map(|x| x * 11).collect();
        assert_eq!(output, expected);
    }

    Ok(())
}

#[tokio::test]
async fn test_errors_pass_through_either_route() {
    let dispatcher = AdaptiveDispatcher::with_threshold(8);

    for len in [6, 60] {
        let result = dispatcher
            .transform(
                numbers(len),
                |_token, index, x| async move {
                    if index == 5 {
                        Err(TestError::at(index))
                    } else {
                        Ok(x)
                    }
                },
                None,
            )
            .await;

        assert_eq!(expect_application_error(result), (5, TestError::at(5)));
    }
}

#[tokio::test]
async fn test_cancelled_token_honored_on_either_route() {
    let dispatcher = AdaptiveDispatcher::with_threshold(8);
    let token = CancellationToken::new();
    token.cancel();

    for len in [0, 3, 30] {
        let result = dispatcher
            .transform(
                numbers(len),
                |_token, _index, x| async move { Ok::<_, TestError>(x) },
                Some(token.clone()),
            )
            .await;

        assert!(matches!(result, Err(TransformError::Cancelled)));
    }
}
