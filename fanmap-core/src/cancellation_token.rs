// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic cancellation token with parent/child scoping.
//!
//! A token is a cheap, clonable handle to shared cancellation state. Tokens
//! derived with [`CancellationToken::child_token`] are cancelled whenever their
//! parent is, while cancelling a child leaves the parent untouched. This is the
//! shape the concurrent transform needs: the caller's token fans out into a
//! per-call scope that can be cancelled on the first error without touching
//! the caller.

use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::{Context, Poll};
use event_listener::{Event, EventListener};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

/// Runtime-agnostic cancellation token.
///
/// A `CancellationToken` can be cloned to create multiple handles to the same
/// cancellation state. When `cancel()` is called on any clone, all waiters on
/// `cancelled()` are notified and every child token is cancelled as well.
///
/// # Example
///
/// ```
/// use fanmap_core::CancellationToken;
///
/// let parent = CancellationToken::new();
/// let child = parent.child_token();
///
/// child.cancel();
/// assert!(child.is_cancelled());
/// assert!(!parent.is_cancelled());
///
/// let sibling = parent.child_token();
/// parent.cancel();
/// assert!(sibling.is_cancelled());
/// ```
#[derive(Clone, Debug)]
pub struct CancellationToken {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    cancelled: AtomicBool,
    event: Event,
    children: Mutex<Vec<Weak<Inner>>>,
    // Children are held weakly, so every node keeps its parent alive. A
    // cancel from the root then reaches descendants of dropped tokens.
    _parent: Option<Arc<Inner>>,
}

impl Inner {
    fn new(parent: Option<Arc<Inner>>) -> Self {
        Self {
            cancelled: AtomicBool::new(false),
            event: Event::new(),
            children: Mutex::new(Vec::new()),
            _parent: parent,
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    fn cancel(&self) {
        // Flag first so waiters woken below observe it.
        if self.cancelled.swap(true, Ordering::AcqRel) {
            return;
        }

        self.event.notify(usize::MAX);

        let children = core::mem::take(&mut *self.children.lock());
        for child in children.iter().filter_map(Weak::upgrade) {
            child.cancel();
        }
    }
}

impl CancellationToken {
    /// Create a new cancellation token.
    ///
    /// The token is initially not cancelled.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner::new(None)),
        }
    }

    /// Derive a child token.
    ///
    /// The child is cancelled when this token is cancelled (immediately, if it
    /// already is). Cancelling the child has no effect on this token.
    #[must_use]
    pub fn child_token(&self) -> Self {
        let child = Arc::new(Inner::new(Some(Arc::clone(&self.inner))));

        {
            // Holding the lock orders this registration against a concurrent
            // `cancel()`, which drains the list under the same lock.
            let mut children = self.inner.children.lock();
            if self.inner.is_cancelled() {
                drop(children);
                child.cancel();
            } else {
                children.retain(|weak| weak.strong_count() > 0);
                children.push(Arc::downgrade(&child));
            }
        }

        Self { inner: child }
    }

    /// Cancel the token, waking all listeners and cancelling all children.
    ///
    /// This method is idempotent.
    pub fn cancel(&self) {
        self.inner.cancel();
    }

    /// Check if the token has been cancelled (non-blocking).
    ///
    /// # Example
    ///
    /// ```
    /// use fanmap_core::CancellationToken;
    ///
    /// let token = CancellationToken::new();
    /// assert!(!token.is_cancelled());
    ///
    /// token.cancel();
    /// assert!(token.is_cancelled());
    /// ```
    pub fn is_cancelled(&self) -> bool {
        self.inner.is_cancelled()
    }

    /// Wait asynchronously until the token is cancelled.
    ///
    /// If the token is already cancelled, this returns immediately.
    ///
    /// # Example
    ///
    /// ```
    /// use fanmap_core::CancellationToken;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let token = CancellationToken::new();
    /// let token_clone = token.clone();
    ///
    /// let waiter = tokio::spawn(async move {
    ///     token_clone.cancelled().await;
    /// });
    ///
    /// token.cancel();
    /// waiter.await.unwrap();
    /// # }
    /// ```
    pub fn cancelled(&self) -> Cancelled<'_> {
        Cancelled {
            token: self,
            listener: None,
        }
    }

    /// Returns a guard that cancels this token when dropped.
    #[must_use]
    pub fn drop_guard(self) -> DropGuard {
        DropGuard { token: Some(self) }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Future returned by [`CancellationToken::cancelled()`].
///
/// This future resolves when the token is cancelled.
#[must_use = "futures do nothing unless polled"]
pub struct Cancelled<'a> {
    token: &'a CancellationToken,
    listener: Option<EventListener>,
}

impl Future for Cancelled<'_> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        loop {
            if self.token.is_cancelled() {
                return Poll::Ready(());
            }

            match self.listener.as_mut() {
                None => {
                    // Re-checked at the top of the loop, so a cancel() racing
                    // with listen() is not missed.
                    self.listener = Some(self.token.inner.event.listen());
                }
                Some(listener) => match Pin::new(listener).poll(cx) {
                    Poll::Ready(()) => self.listener = None,
                    Poll::Pending => return Poll::Pending,
                },
            }
        }
    }
}

/// Cancels the wrapped token on drop unless [`DropGuard::disarm`] is called.
#[derive(Debug)]
pub struct DropGuard {
    token: Option<CancellationToken>,
}

impl DropGuard {
    /// Give the token back without cancelling it.
    pub fn disarm(mut self) -> CancellationToken {
        // `token` is only ever taken here or in `drop`
        self.token.take().unwrap_or_default()
    }
}

impl Drop for DropGuard {
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            token.cancel();
        }
    }
}
