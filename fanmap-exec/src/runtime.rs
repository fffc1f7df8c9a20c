// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic spawning of detached units.
//!
//! Select the runtime via feature flags: `runtime-tokio` (default) or
//! `runtime-smol`. When both are enabled tokio wins.

use core::future::Future;

/// Spawn `future` as an independent, detached task on the configured runtime.
///
/// Completion is observed by the caller through whatever channel the future
/// reports into, not through a join handle.
///
/// # Panics
///
/// With `runtime-tokio`, panics if called outside a tokio runtime.
pub(crate) fn spawn_detached<Fut>(future: Fut)
where
    Fut: Future<Output = ()> + Send + 'static,
{
    #[cfg(feature = "runtime-tokio")]
    {
        // Dropping the handle detaches the task.
        drop(tokio::spawn(future));
    }

    #[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
    smol::spawn(future).detach();
}
