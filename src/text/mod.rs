//! Text segmentation for synthesis.
//!
//! Splits narration text into chunks that fit the gateway's per-request
//! character budget, preferring sentence and clause punctuation as breaks.

mod segmenter;

pub use segmenter::{
    BREAK_SET, BreakPolicy, MAX_CHUNK_LEN, ScanState, Transition, segment, segment_line,
    segment_with,
};
