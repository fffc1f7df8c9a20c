// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Transform engines for fanmap.
//!
//! - [`sequential`]: in-order transform on the caller's thread of control
//! - [`concurrent`]: one spawned unit per element, first error wins, fully
//!   drained before returning
//! - [`dispatch`]: picks one of the two by input length
//!
//! All three implement [`TransformEngine`].

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

mod logging;

pub mod engine;
pub mod sequential;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub mod concurrent;
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub mod dispatch;
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
mod runtime;

pub use engine::TransformEngine;
pub use sequential::SequentialEngine;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use concurrent::ConcurrentEngine;
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use dispatch::{AdaptiveDispatcher, DispatchConfig, Route, DEFAULT_THRESHOLD};
