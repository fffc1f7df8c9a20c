// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use async_io::Timer;
use fanmap_core::{CancellationToken, TransformError};
use fanmap_exec::concurrent::transform;
use fanmap_exec::{AdaptiveDispatcher, TransformEngine};
use fanmap_test_utils::test_data::numbers;
use fanmap_test_utils::{expect_application_error, inverse_delay, CompletionCounter, TestError};
use futures::future::{select, Either};
use std::time::Duration;

#[test]
fn test_order_preserved_when_last_finishes_first_smol() {
    smol::block_on(async {
        // Arrange
        let len = 20;
        let func = move |_token: CancellationToken, index: usize, x: i64| async move {
            Timer::after(inverse_delay(index, len, 5)).await;
            Ok::<_, TestError>(x * 2)
        };

        // Act
        let output = transform(numbers(len), func, None).await.unwrap();

        // Assert
        assert_eq!(output, (0..len as i64).map(|x| x * 2).collect::<Vec<_>>());
    });
}

#[test]
fn test_failure_drains_every_unit_smol() {
    smol::block_on(async {
        // Arrange
        let len = 200;
        let counter = CompletionCounter::new();
        let func = {
            let counter = counter.clone();
            move |_token: CancellationToken, index: usize, x: i64| {
                let counter = counter.clone();
                async move {
                    if index == 0 {
                        counter.complete();
                        return Err(TestError::at(index));
                    }
                    Timer::after(Duration::from_millis((index % 5) as u64 + 1)).await;
                    counter.complete();
                    Ok(x)
                }
            }
        };

        // Act
        let result = transform(numbers(len), func, None).await;

        // Assert
        assert_eq!(expect_application_error(result), (0, TestError::at(0)));
        assert_eq!(counter.count(), len);
    });
}

#[test]
fn test_error_cancels_siblings_smol() {
    smol::block_on(async {
        // Arrange
        let len = 16;
        let observed = CompletionCounter::new();
        let func = {
            let observed = observed.clone();
            move |token: CancellationToken, index: usize, x: i64| {
                let observed = observed.clone();
                async move {
                    if index == 3 {
                        return Err(TestError::at(index));
                    }
                    let timeout = Timer::after(Duration::from_secs(30));
                    if let Either::Left(_) = select(token.cancelled(), timeout).await {
                        observed.complete();
                    }
                    Ok(x)
                }
            }
        };

        // Act
        let result = transform(numbers(len), func, None).await;

        // Assert
        assert_eq!(expect_application_error(result).0, 3);
        assert_eq!(observed.count(), len - 1);
    });
}

#[test]
fn test_caller_cancel_reports_cancellation_smol() {
    smol::block_on(async {
        // Arrange
        let caller = CancellationToken::new();
        let func = |token: CancellationToken, index: usize, _x: i64| async move {
            token.cancelled().await;
            Err::<i64, _>(TestError::at(index))
        };
        let task = smol::spawn(transform(numbers(8), func, Some(caller.clone())));

        // Act
        Timer::after(Duration::from_millis(20)).await;
        caller.cancel();

        // Assert
        assert!(matches!(task.await, Err(TransformError::Cancelled)));
    });
}

#[test]
fn test_dispatcher_runs_both_routes_smol() {
    smol::block_on(async {
        let dispatcher = AdaptiveDispatcher::with_threshold(10);

        for len in [5, 50] {
            let output = dispatcher
                .transform(
                    numbers(len),
                    |_token, _index, x| async move { Ok::<_, TestError>(x + 1) },
                    None,
                )
                .await
                .unwrap();

            assert_eq!(output, (1..=len as i64).collect::<Vec<_>>());
        }
    });
}
