// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the fanmap workspace.
//!
//! Designed for use in development and testing only, not for production code.
//!
//! # Module Organization
//!
//! - `person` - a non-`Copy` element type for transforms
//! - `test_data` - pre-defined fixtures
//! - `test_error` - an application error type for failing transforms
//! - `helpers` - completion counting, delays and timeout assertions
//!
//! ```rust
//! use fanmap_test_utils::{inverse_delay, CompletionCounter};
//!
//! let counter = CompletionCounter::new();
//! counter.clone().complete();
//! assert_eq!(counter.count(), 1);
//!
//! assert!(inverse_delay(9, 10, 5) < inverse_delay(0, 10, 5));
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod person;
pub mod test_data;
pub mod test_error;

pub use helpers::{
    assert_completes_within, expect_application_error, inverse_delay, CompletionCounter,
};
pub use person::Person;
pub use test_error::TestError;
