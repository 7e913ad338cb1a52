//! Execution frame types
//!
//! Each frame represents one pending sub-range of the working buffer.
//! The frame stack replaces the system call stack, making a run resumable
//! (and serializable) between checkpoints.

use crate::types::Range;
use serde::{Deserialize, Serialize};

/* ===================== Phases ===================== */

/// Phase of a sub-range's divide-and-conquer lifecycle
///
/// When a frame is back on top of the stack, its phase says which
/// transition runs next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Not yet examined; the base case or a split step comes next.
    Enter,
    /// Split step emitted; the left half still needs sorting.
    Left,
    /// Left half sorted in place; the right half still needs sorting.
    Right,
    /// Both halves sorted in place; merge, write back, and emit.
    Merge,
}

/* ===================== Frames ===================== */

/// One pending sub-range of the sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Starting index of this sub-range in the full buffer
    pub offset: usize,

    /// Number of elements in this sub-range
    pub len: usize,

    /// Recursion depth, zero at the root (affects split wording only)
    pub depth: usize,

    /// Which transition runs when this frame is next processed
    pub phase: Phase,
}

impl Frame {
    /// Fresh frame for a sub-range that has not been examined yet.
    pub fn enter(offset: usize, len: usize, depth: usize) -> Self {
        Frame {
            offset,
            len,
            depth,
            phase: Phase::Enter,
        }
    }

    /// Length of the left half. The right half gets the extra element
    /// when `len` is odd.
    pub fn mid(&self) -> usize {
        self.len / 2
    }

    /// Inclusive highlight range this frame covers. Requires `len >= 1`.
    pub fn range(&self) -> Range {
        Range {
            start: self.offset,
            end: self.offset + self.len - 1,
        }
    }
}
