//! Merge handler
//!
//! Combines a frame's two already-sorted halves by head-to-head
//! comparison, writes the result back into the shared buffer, and builds
//! the merge checkpoint with its comparison trace.

use super::frame::Frame;
use super::machine::StepEmitter;
use crate::types::{Step, StepKind};
use std::fmt;

impl<T: Ord + Clone + fmt::Debug> StepEmitter<T> {
    /// Merge the two sorted halves of `frame`'s sub-range in place.
    ///
    /// Ties take the LEFT element, so equal values keep their input
    /// order (stability) and the trace is deterministic.
    pub(super) fn merge_in_place(&mut self, frame: Frame) -> Step<T> {
        let mid = frame.offset + frame.mid();
        let left: Vec<T> = self.buffer[frame.offset..mid].to_vec();
        let right: Vec<T> = self.buffer[mid..frame.offset + frame.len].to_vec();
        tracing::trace!(offset = frame.offset, len = frame.len, "merge");

        let mut merged: Vec<T> = Vec::with_capacity(frame.len);
        let mut trace = String::from("Based on the comparisons, ");
        let mut left_idx = 0;
        let mut right_idx = 0;

        while left_idx < left.len() && right_idx < right.len() {
            if left[left_idx] <= right[right_idx] {
                trace.push_str(&format!(
                    "\n comparing {:?} and {:?}, I took {:?} from the left half,",
                    left[left_idx], right[right_idx], left[left_idx]
                ));
                merged.push(left[left_idx].clone());
                left_idx += 1;
            } else {
                trace.push_str(&format!(
                    "\n comparing {:?} and {:?}, I took {:?} from the right half,",
                    left[left_idx], right[right_idx], right[right_idx]
                ));
                merged.push(right[right_idx].clone());
                right_idx += 1;
            }
        }

        // Whichever half still has elements drains in order
        merged.extend_from_slice(&left[left_idx..]);
        merged.extend_from_slice(&right[right_idx..]);

        trace.push_str(&format!(
            " then appended the remainder so this region became {merged:?}."
        ));

        // Write back at the sub-range offset so later snapshots see the
        // merged region
        for (i, val) in merged.into_iter().enumerate() {
            self.buffer[frame.offset + i] = val;
        }

        Step {
            kind: StepKind::Merge,
            message: format!("Comparing and merging left {left:?} and right {right:?}.\n{trace}"),
            snapshot: self.buffer.clone(),
            highlight: frame.range(),
        }
    }
}
