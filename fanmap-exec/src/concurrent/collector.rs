// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::logging::{log_error, log_info, log_warn};
use fanmap_core::{CancellationToken, IndexedResult, TransformError};

/// Join point of one concurrent call.
///
/// Owns the output slots and the first recorded error. Every unit's report is
/// passed through [`Collector::record`] exactly once, including reports that
/// arrive after the call has already failed.
#[derive(Debug)]
pub(crate) struct Collector<U, E> {
    slots: Vec<Option<U>>,
    received: usize,
    first_error: Option<TransformError<E>>,
    caller: CancellationToken,
    scope: CancellationToken,
}

impl<U, E> Collector<U, E> {
    /// `caller` is the token handed to the transform, `scope` the child token
    /// the units observe.
    pub(crate) fn new(len: usize, caller: CancellationToken, scope: CancellationToken) -> Self {
        Self {
            slots: core::iter::repeat_with(|| None).take(len).collect(),
            received: 0,
            first_error: None,
            caller,
            scope,
        }
    }

    pub(crate) fn record(&mut self, report: IndexedResult<U, E>) {
        self.received += 1;

        if self.first_error.is_some() {
            return;
        }

        if self.caller.is_cancelled() {
            self.cancel();
            return;
        }

        match report.outcome {
            Ok(value) => {
                let slot = &mut self.slots[report.index];
                debug_assert!(slot.is_none(), "index {} reported twice", report.index);
                *slot = Some(value);
            }
            Err(err) => {
                match &err {
                    TransformError::Panicked { index, message } => {
                        log_error!("concurrent transform: unit {index} panicked: {message}");
                    }
                    _ => {
                        log_warn!(
                            "concurrent transform: unit {:?} failed, cancelling siblings",
                            err.index()
                        );
                    }
                }
                self.fail(err);
            }
        }
    }

    /// Record the caller's cancellation unless a failure was recorded first.
    pub(crate) fn cancel(&mut self) {
        if self.first_error.is_some() {
            return;
        }

        log_info!(
            "concurrent transform: caller cancelled, draining {} remaining units",
            self.slots.len() - self.received
        );
        self.fail(TransformError::Cancelled);
    }

    fn fail(&mut self, err: TransformError<E>) {
        self.first_error = Some(err);
        self.scope.cancel();
    }

    pub(crate) const fn received(&self) -> usize {
        self.received
    }

    /// Turn the collected reports into the call's outcome.
    pub(crate) fn finish(self) -> Result<Vec<U>, TransformError<E>> {
        if let Some(err) = self.first_error {
            return Err(err);
        }

        self.slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.ok_or_else(|| {
                    log_error!("concurrent transform: unit {index} ended without reporting");
                    TransformError::Abandoned { index }
                })
            })
            .collect()
    }
}
