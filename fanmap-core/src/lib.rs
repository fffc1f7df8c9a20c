// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cancellation_token;
pub mod error;
pub mod indexed_result;

pub use self::cancellation_token::{CancellationToken, Cancelled, DropGuard};
pub use self::error::{ListError, TransformError, TransformResult};
pub use self::indexed_result::IndexedResult;
