// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! List helpers and the [`Lifted`] functor wrapper.
//!
//! These are thin layers over the engines in `fanmap-exec`; they add no
//! coordination of their own.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod lifted;
pub mod list;

pub use lifted::{lift, Lifted};
pub use list::{cons, head, tail, zip};
