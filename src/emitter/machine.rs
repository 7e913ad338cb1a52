//! Step machine state
//!
//! The emitter holds all suspension state:
//! - buffer: the full working sequence, merged in place
//! - frames: stack of pending sub-ranges

use super::frame::Frame;
use crate::types::Step;
use serde::{Deserialize, Serialize};

/* ===================== Emitter ===================== */

/// Suspended merge sort over one owned buffer
///
/// This contains everything needed to resume (and serialize) an
/// in-flight run. Between `advance()` calls the machine is inert plain
/// data; suspension is purely a return to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepEmitter<T> {
    /// The full working sequence, mutated in place as sub-merges complete
    pub(crate) buffer: Vec<T>,

    /// Stack of pending sub-ranges
    pub(crate) frames: Vec<Frame>,
}

impl<T: Ord + Clone + std::fmt::Debug> StepEmitter<T> {
    /// Begin a run over `sequence`.
    ///
    /// An empty sequence starts with no frames, so the first `advance()`
    /// completes immediately without emitting any step.
    pub fn new(sequence: Vec<T>) -> Self {
        let mut frames = Vec::new();
        if !sequence.is_empty() {
            frames.push(Frame::enter(0, sequence.len(), 0));
        }
        StepEmitter {
            buffer: sequence,
            frames,
        }
    }

    /// True once every frame has been processed.
    pub fn is_finished(&self) -> bool {
        self.frames.is_empty()
    }
}

/* ===================== Advance Result ===================== */

/// Result of one `advance()` call
#[derive(Debug, Clone, PartialEq)]
pub enum Advance<T> {
    /// One checkpoint's worth of work is done; render and resume.
    Step(Step<T>),
    /// The sort finished; the terminal sorted sequence, produced once.
    Done(Vec<T>),
}
