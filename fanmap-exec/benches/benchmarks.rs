// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::dispatch_bench::bench_dispatch_threshold;
use criterion::{criterion_group, criterion_main};


criterion_group!(benches, bench_dispatch_threshold);
criterion_main!(benches);
