//! Core step loop
//!
//! This module contains the advance() function - the heart of the emitter.
//! It processes frame transitions until the next checkpoint is reached,
//! then suspends by returning the step to the caller.
//!
//! ## Function Organization
//! Functions are ordered by importance/call hierarchy:
//! 1. run_to_completion() - Top-level driver (calls advance repeatedly)
//! 2. advance() - Main step loop (dispatches on the top frame's phase)

use super::frame::{Frame, Phase};
use super::machine::{Advance, StepEmitter};
use crate::types::{Step, StepKind};
use std::fmt;

/* ===================== Public API ===================== */

/// Drive an emitter to completion, collecting every step
///
/// Top-level driver for callers that don't need to pause between
/// checkpoints. Returns the full step list and the sorted sequence.
pub fn run_to_completion<T: Ord + Clone + fmt::Debug>(
    emitter: &mut StepEmitter<T>,
) -> (Vec<Step<T>>, Vec<T>) {
    let mut steps = Vec::new();
    loop {
        match emitter.advance() {
            Advance::Step(step) => steps.push(step),
            Advance::Done(sorted) => return (steps, sorted),
        }
    }
}

impl<T: Ord + Clone + fmt::Debug> StepEmitter<T> {
    /// Execute the work between the previous suspension point and the
    /// next checkpoint
    ///
    /// Each call:
    /// 1. Gets the top frame (no frames left means the sort is complete)
    /// 2. Matches on the frame's phase
    /// 3. Runs phase transitions (pushing child frames) until a
    ///    checkpoint step is ready
    /// 4. Emits exactly one step, or the terminal sorted sequence
    ///
    /// The terminal sequence is handed out by value; a further call
    /// yields `Done` again with an empty buffer. The controller never
    /// advances past `Done`.
    pub fn advance(&mut self) -> Advance<T> {
        loop {
            let Some(frame) = self.frames.last().copied() else {
                // No frames left - the sort is complete
                tracing::debug!(len = self.buffer.len(), "run complete");
                return Advance::Done(std::mem::take(&mut self.buffer));
            };

            match frame.phase {
                Phase::Enter => {
                    // Base case: 0 or 1 elements are already sorted
                    if frame.len < 2 {
                        self.frames.pop();
                        return Advance::Step(self.base_case_step(frame));
                    }

                    // Split step must precede any work on either half
                    self.set_top_phase(Phase::Left);
                    return Advance::Step(self.split_step(frame));
                }

                Phase::Left => {
                    // Descend into the left half; no checkpoint here
                    self.set_top_phase(Phase::Right);
                    self.frames
                        .push(Frame::enter(frame.offset, frame.mid(), frame.depth + 1));
                }

                Phase::Right => {
                    // Left half is sorted in place; descend into the right
                    self.set_top_phase(Phase::Merge);
                    self.frames.push(Frame::enter(
                        frame.offset + frame.mid(),
                        frame.len - frame.mid(),
                        frame.depth + 1,
                    ));
                }

                Phase::Merge => {
                    // Both halves sorted in place; combine and emit
                    let step = self.merge_in_place(frame);
                    self.frames.pop();
                    return Advance::Step(step);
                }
            }
        }
    }

    /* ===================== Checkpoint Construction ===================== */

    fn base_case_step(&self, frame: Frame) -> Step<T> {
        tracing::trace!(offset = frame.offset, "base case");
        Step {
            kind: StepKind::BaseCase,
            message: "There is only one element in this half, so it is already sorted."
                .to_string(),
            snapshot: self.buffer.clone(),
            highlight: frame.range(),
        }
    }

    fn split_step(&self, frame: Frame) -> Step<T> {
        let mid = frame.offset + frame.mid();
        let left = &self.buffer[frame.offset..mid];
        let right = &self.buffer[mid..frame.offset + frame.len];
        tracing::trace!(offset = frame.offset, len = frame.len, "split");

        // Below the root the message reads "the next array" (the caller
        // is walking from one region to the next)
        let next = if frame.depth > 0 { "next " } else { "" };
        Step {
            kind: StepKind::Split,
            message: format!(
                "Splitting the {next}array in half.\n\
                 Left half consists of: {left:?}\n\
                 Right half consists of: {right:?}"
            ),
            snapshot: self.buffer.clone(),
            highlight: frame.range(),
        }
    }

    fn set_top_phase(&mut self, phase: Phase) {
        let idx = self.frames.len() - 1;
        self.frames[idx].phase = phase;
    }
}
