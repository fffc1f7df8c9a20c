// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Size-adaptive selection between the sequential and concurrent engines.

use crate::concurrent::ConcurrentEngine;
use crate::engine::TransformEngine;
use crate::logging::log_debug;
use crate::sequential::SequentialEngine;
use async_trait::async_trait;
use core::future::Future;
use fanmap_core::{CancellationToken, TransformError};

/// Default length from which inputs are transformed concurrently.
pub const DEFAULT_THRESHOLD: usize = 100;

/// Tuning for [`AdaptiveDispatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Inputs shorter than this run sequentially; the rest run concurrently.
    pub threshold: usize,
}

impl DispatchConfig {
    #[must_use]
    pub const fn new(threshold: usize) -> Self {
        Self { threshold }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

/// Which engine a given input length is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Sequential,
    Concurrent,
}

/// Picks the sequential engine for short inputs and the concurrent one otherwise.
///
/// The dispatcher holds no state besides its configuration and the two
/// engines it delegates to. Both engines are type parameters so tests can
/// substitute recording doubles.
///
/// # Examples
///
/// ```
/// use fanmap_exec::{AdaptiveDispatcher, DispatchConfig, Route, TransformEngine};
///
/// # #[tokio::main]
/// # async fn main() {
/// let dispatcher = AdaptiveDispatcher::new(DispatchConfig::new(4));
/// assert_eq!(dispatcher.route(3), Route::Sequential);
/// assert_eq!(dispatcher.route(4), Route::Concurrent);
///
/// let squares = dispatcher
///     .transform(
///         (0..10).collect(),
///         |_token, _index, x: u64| async move { Ok::<_, std::io::Error>(x * x) },
///         None,
///     )
///     .await
///     .unwrap();
/// assert_eq!(squares[9], 81);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdaptiveDispatcher<S = SequentialEngine, C = ConcurrentEngine> {
    config: DispatchConfig,
    sequential: S,
    concurrent: C,
}

impl AdaptiveDispatcher {
    #[must_use]
    pub const fn new(config: DispatchConfig) -> Self {
        Self::with_engines(config, SequentialEngine, ConcurrentEngine)
    }

    #[must_use]
    pub const fn with_threshold(threshold: usize) -> Self {
        Self::new(DispatchConfig::new(threshold))
    }
}

impl<S, C> AdaptiveDispatcher<S, C> {
    /// Build a dispatcher over arbitrary engines.
    pub const fn with_engines(config: DispatchConfig, sequential: S, concurrent: C) -> Self {
        Self {
            config,
            sequential,
            concurrent,
        }
    }

    #[must_use]
    pub const fn config(&self) -> DispatchConfig {
        self.config
    }

    /// Engine selected for an input of `len` elements.
    #[must_use]
    pub const fn route(&self, len: usize) -> Route {
        if len < self.config.threshold {
            Route::Sequential
        } else {
            Route::Concurrent
        }
    }
}

#[async_trait]
impl<S, C> TransformEngine for AdaptiveDispatcher<S, C>
where
    S: TransformEngine,
    C: TransformEngine,
{
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
        let route = self.route(items.len());
        log_debug!("dispatch: {} items routed {route:?}", items.len());

        match route {
            Route::Sequential => {
                self.sequential
                    .transform(items, f, cancellation_token)
                    .await
            }
            Route::Concurrent => {
                self.concurrent
                    .transform(items, f, cancellation_token)
                    .await
            }
        }
    }
}
