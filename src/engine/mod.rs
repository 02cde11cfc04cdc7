//! Synthesis engine.
//!
//! Turns a chunk sequence into one audio file by calling the synthesizer for
//! each chunk in order and appending the returned bytes, and finds the input
//! files a run should process.

mod assembler;
mod discover;

pub use assembler::{Assembler, AssemblyReport, EngineError, FailurePolicy, SynthesisJob};
pub use discover::{INPUT_EXTENSION, discover_inputs, output_path_for};
