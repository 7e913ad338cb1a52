// Run management module
//
// The controller owns at most one run of the step-wise sort:
// - Starting a run (with input validation)
// - Advancing it one checkpoint at a time
// - Distinguishing completion from "no active run"
// - Resetting unconditionally


use crate::emitter::{Advance, StepEmitter};
use crate::types::Progress;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest sequence the default controller accepts.
///
/// Matches the demo generator's cap; callers with other renderers can
/// raise it via [`StepController::with_max_len`].
pub const MAX_SEQUENCE_LENGTH: usize = 50;

/* ===================== Errors ===================== */

/// Errors surfaced by the controller
///
/// All are reported synchronously from the call that detects them and
/// none are retried internally. `reset()` never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ControlError {
    #[error("a run is already in progress; reset before starting another")]
    RunInProgress,

    #[error("cannot sort an empty sequence")]
    EmptyInput,

    #[error("sequence of {len} elements exceeds the maximum of {max}")]
    SequenceTooLong { len: usize, max: usize },

    #[error("no sorting in progress")]
    NoActiveRun,
}

/* ===================== Controller ===================== */

/// Owns at most one run of the step-wise sort
///
/// The wrapped emitter is plain serializable data, so a controller with
/// a suspended run round-trips through serde unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepController<T> {
    run: Option<StepEmitter<T>>,
    max_len: usize,
}

impl<T: Ord + Clone + fmt::Debug> StepController<T> {
    pub fn new() -> Self {
        Self::with_max_len(MAX_SEQUENCE_LENGTH)
    }

    pub fn with_max_len(max_len: usize) -> Self {
        StepController { run: None, max_len }
    }

    /// Begin a new run over `sequence`.
    ///
    /// Fails if a run is already active, or if the sequence is empty or
    /// longer than the configured maximum. No run is created on failure.
    pub fn start(&mut self, sequence: Vec<T>) -> Result<(), ControlError> {
        if self.run.is_some() {
            return Err(ControlError::RunInProgress);
        }
        if sequence.is_empty() {
            return Err(ControlError::EmptyInput);
        }
        if sequence.len() > self.max_len {
            return Err(ControlError::SequenceTooLong {
                len: sequence.len(),
                max: self.max_len,
            });
        }

        tracing::debug!(len = sequence.len(), "starting run");
        self.run = Some(StepEmitter::new(sequence));
        Ok(())
    }

    /// Advance the active run by one checkpoint.
    ///
    /// On completion the run is cleared, so the terminal sequence is
    /// handed out exactly once and a further `next()` is `NoActiveRun`.
    pub fn next(&mut self) -> Result<Progress<T>, ControlError> {
        let Some(run) = self.run.as_mut() else {
            return Err(ControlError::NoActiveRun);
        };

        match run.advance() {
            Advance::Step(step) => Ok(Progress::Step(step)),
            Advance::Done(sorted) => {
                self.run = None;
                Ok(Progress::Complete(sorted))
            }
        }
    }

    /// Discard the active run, if any. Idempotent, never fails.
    pub fn reset(&mut self) {
        self.run = None;
    }

    /// True while a run is in progress.
    pub fn is_active(&self) -> bool {
        self.run.is_some()
    }
}

impl<T: Ord + Clone + fmt::Debug> Default for StepController<T> {
    fn default() -> Self {
        Self::new()
    }
}
