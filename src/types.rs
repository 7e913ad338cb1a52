use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    BaseCase,
    Split,
    Merge,
}

/// Inclusive index range into the full sequence.
///
/// Invariant: `start <= end < snapshot.len()` for every emitted step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    /// Absolute index of the first element of the right half.
    ///
    /// For a single-element range this equals `start`.
    pub fn midpoint(&self) -> usize {
        self.start + (self.end - self.start + 1) / 2
    }
}

/// One externally observable checkpoint of the sort.
///
/// The snapshot is a copy taken at emission time, so a step stays valid
/// after later merges mutate the working buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step<T> {
    pub kind: StepKind,
    pub message: String,
    pub snapshot: Vec<T>,
    pub highlight: Range,
}

/// What the controller hands back from `next()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Progress<T> {
    /// An intermediate checkpoint; render it and call `next()` again.
    Step(Step<T>),
    /// The run finished; the terminal sorted sequence, produced once.
    Complete(Vec<T>),
}
