//! # Step Emitter - Resumable Stack-Driven Merge Sort
//!
//! Merge sort re-expressed as a sequence of observable checkpoints.
//!
//! ## Core Principles
//!
//! 1. **Stack-driven execution**: All state in `frames: Vec<Frame>`, no recursion
//! 2. **Cooperative suspension**: `advance()` pauses only at checkpoints
//!    (base case, split, merge), never mid-comparison
//! 3. **In-place merges**: completed children live in the shared buffer,
//!    so frames carry no partial results
//! 4. **Pure machine**: no I/O, no async - plain serializable data between calls

pub mod advance;
pub mod frame;
pub mod machine;
mod merge;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use advance::run_to_completion;
pub use frame::{Frame, Phase};
pub use machine::{Advance, StepEmitter};
