// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # fanmap
//!
//! Element-wise transforms over fully materialized sequences.
//!
//! ## Overview
//!
//! - [`sequential::transform`] walks the input in order on the caller's thread
//!   and stops at the first error.
//! - [`concurrent::transform`] spawns one unit per element, keeps output order,
//!   surfaces only the first error, cancels the remaining units and waits for
//!   all of them before returning.
//! - [`AdaptiveDispatcher`] picks one of the two by input length.
//! - [`lift`] wraps a `Vec` in a [`Lifted`] with a fluent `map`; [`cons`],
//!   [`head`], [`tail`] and [`zip`] cover the usual list helpers.
//!
//! ## Quick Start
//!
//! ```rust
//! use fanmap::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let token = CancellationToken::new();
//!
//!     let lengths = concurrent::transform(
//!         vec!["fan", "out", "join"],
//!         |_token, _index, word: &'static str| async move {
//!             Ok::<_, std::io::Error>(word.len())
//!         },
//!         Some(token),
//!     )
//!     .await
//!     .unwrap();
//!
//!     assert_eq!(lengths, vec![3, 3, 4]);
//! }
//! ```

// Re-export core types
pub use fanmap_core::{
    CancellationToken, IndexedResult, ListError, TransformError, TransformResult,
};

// Re-export the engines
pub use fanmap_exec::sequential;
pub use fanmap_exec::{SequentialEngine, TransformEngine};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use fanmap_exec::concurrent;
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use fanmap_exec::{AdaptiveDispatcher, ConcurrentEngine, DispatchConfig, Route};

// Re-export list helpers
pub use fanmap_list::{cons, head, lift, tail, zip, Lifted};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::sequential;
    pub use crate::{lift, CancellationToken, Lifted, TransformEngine, TransformError};

    #[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
    pub use crate::{concurrent, AdaptiveDispatcher, DispatchConfig};
}
