//! txt2speech: batch text-to-speech over a remote synthesis gateway.
//!
//! This crate splits narration text into character-bounded chunks, sends each
//! chunk to a streaming TTS endpoint in order, and appends the returned audio
//! into one output file per input text file.

pub mod backend;
pub mod cli;
pub mod config;
pub mod engine;
pub mod text;
