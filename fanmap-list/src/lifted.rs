// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A sequence lifted into a wrapper with a fluent `map`.
//!
//! Every `map` variant obeys the functor laws:
//!
//! 1. mapping the identity function gives back an equal sequence;
//! 2. mapping `g ∘ f` equals mapping `f` then mapping `g`.

use core::convert::Infallible;
use fanmap_core::{CancellationToken, TransformError};
use fanmap_exec::sequential;
use fanmap_exec::TransformEngine;

/// An owned sequence with functor-style mapping.
///
/// # Examples
///
/// ```
/// use fanmap_list::lift;
///
/// let lifted = lift(vec![1, 2, 3]).map(|x| x + 1).map(|x| x * 10);
/// assert_eq!(lifted.into_inner(), vec![20, 30, 40]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lifted<T> {
    items: Vec<T>,
}

/// Lift `items` into a [`Lifted`].
pub fn lift<T>(items: Vec<T>) -> Lifted<T> {
    Lifted { items }
}

impl<T> Lifted<T> {
    /// Apply `f` to every element, in order.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Lifted<U>
    where
        F: FnMut(T) -> U,
    {
        Lifted {
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Apply a fallible `f` to every element, stopping at the first error.
    ///
    /// # Errors
    ///
    /// [`TransformError::Transform`] with the first error returned by `f`.
    pub fn try_map<U, E, F>(self, f: F) -> Result<Lifted<U>, TransformError<E>>
    where
        F: FnMut(usize, T) -> Result<U, E>,
    {
        sequential::transform(self.items, f).map(lift)
    }

    /// Apply `f` to every element through `engine`.
    ///
    /// With an [`AdaptiveDispatcher`](fanmap_exec::AdaptiveDispatcher) short
    /// sequences are mapped in place on the caller's task and long ones
    /// concurrently. `f` itself cannot fail, but the engine can still report
    /// cancellation or a panic.
    ///
    /// # Errors
    ///
    /// [`TransformError::Cancelled`] or [`TransformError::Panicked`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fanmap_exec::AdaptiveDispatcher;
    /// use fanmap_list::lift;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let dispatcher = AdaptiveDispatcher::with_threshold(100);
    /// let lifted = lift((0..1000u32).collect())
    ///     .map_with(&dispatcher, |x: u32| x * 2, None)
    ///     .await
    ///     .unwrap();
    ///
    /// assert_eq!(lifted.len(), 1000);
    /// assert_eq!(lifted.as_slice()[999], 1998);
    /// # }
    /// ```
    pub async fn map_with<U, F, D>(
        self,
        engine: &D,
        f: F,
        cancellation_token: Option<CancellationToken>,
    ) -> Result<Lifted<U>, TransformError<Infallible>>
    where
        T: Send + 'static,
        U: Send + 'static,
        F: Fn(T) -> U + Clone + Send + Sync + 'static,
        D: TransformEngine,
    {
        let items = engine
            .transform(
                self.items,
                move |_token: CancellationToken, _index: usize, item: T| {
                    let output = f(item);
                    async move { Ok::<_, Infallible>(output) }
                },
                cancellation_token,
            )
            .await?;

        Ok(lift(items))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> From<Vec<T>> for Lifted<T> {
    fn from(items: Vec<T>) -> Self {
        lift(items)
    }
}

impl<T> FromIterator<T> for Lifted<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        lift(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Lifted<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
