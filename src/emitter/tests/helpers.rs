//! Test helpers for emitter tests
//!
//! Common utilities for building emitters and draining their steps

use crate::emitter::{run_to_completion, Advance, StepEmitter};
use crate::types::{Range, Step};

/// Build an emitter over `values`, round-tripping a fresh run through
/// JSON to verify the machine state serializes.
pub fn build_emitter(values: &[i32]) -> StepEmitter<i32> {
    let emitter = StepEmitter::new(values.to_vec());
    let json = serde_json::to_string(&emitter).expect("emitter serialization failed");
    serde_json::from_str(&json).expect("emitter deserialization failed")
}

/// Drain an emitter, returning every step and the sorted result.
pub fn drain(values: &[i32]) -> (Vec<Step<i32>>, Vec<i32>) {
    let mut emitter = build_emitter(values);
    run_to_completion(&mut emitter)
}

/// Advance and unwrap an intermediate step; panics on `Done`.
pub fn next_step(emitter: &mut StepEmitter<i32>) -> Step<i32> {
    match emitter.advance() {
        Advance::Step(step) => step,
        Advance::Done(sorted) => panic!("expected a step, run finished with {sorted:?}"),
    }
}

/// Shorthand for an inclusive highlight range.
pub fn range(start: usize, end: usize) -> Range {
    Range { start, end }
}
