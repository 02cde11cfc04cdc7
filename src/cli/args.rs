//! CLI argument definitions and parsing.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::backend::DEFAULT_ENDPOINT;
use crate::engine::FailurePolicy;

/// Convert every text file in a directory to speech.
#[derive(Parser, Debug)]
#[command(name = "txt2speech")]
#[command(about = "Synthesize each .txt file in a directory into one audio file")]
#[command(version)]
pub struct Args {
    /// Voice configuration file
    #[arg(short, long, default_value = "conf.ini")]
    pub config: PathBuf,

    /// Directory to scan for .txt files (not recursive)
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Synthesis gateway endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// What to do when a chunk fails to synthesize
    #[arg(long, value_enum, default_value = "skip")]
    pub on_error: OnError,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Per-chunk failure handling.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OnError {
    /// Leave a gap in the audio and keep going
    #[default]
    Skip,

    /// Stop the run at the first failed chunk
    Abort,
}

impl OnError {
    /// Returns the CLI argument string for this option.
    pub fn as_str(&self) -> &'static str {
        match self {
            OnError::Skip => "skip",
            OnError::Abort => "abort",
        }
    }
}

impl From<OnError> for FailurePolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Skip => FailurePolicy::Skip,
            OnError::Abort => FailurePolicy::Abort,
        }
    }
}

impl Args {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
