//! Tests for the step emitter
//!
//! Organized by feature area

mod helpers;
