pub mod cli;
pub mod controller;
pub mod emitter;
pub mod generate;
pub mod render;
pub mod types;

// Re-export main types
pub use types::*;

// Re-export the two components for convenience
pub use controller::{ControlError, StepController, MAX_SEQUENCE_LENGTH};
pub use emitter::{run_to_completion, Advance, StepEmitter};
