//! Sequential synthesize-and-append pipeline.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{debug, warn};
use thiserror::Error;

use crate::backend::{SynthesisError, Synthesizer};
use crate::config::VoiceConfig;

/// Errors that stop processing of a file.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Synthesis failed for chunk {index}: {source}")]
    Synthesis {
        index: usize,
        #[source]
        source: SynthesisError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What to do when a single chunk fails to synthesize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the failure and continue without that chunk's audio.
    #[default]
    Skip,
    /// Stop processing the file.
    Abort,
}

/// One chunk's position in the current file, for progress reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisJob<'a> {
    pub text: &'a str,
    pub index: usize,
    pub total: usize,
}

impl SynthesisJob<'_> {
    /// Completion percentage once this job has been handled.
    pub fn progress_percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.index + 1) as f64 / self.total as f64 * 100.0
    }
}

/// Outcome of assembling one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    pub chunks_total: usize,
    pub chunks_written: usize,
    pub bytes_written: u64,
    /// Indices of chunks skipped after a synthesis failure.
    pub failed: Vec<usize>,
}

impl AssemblyReport {
    /// True when every chunk produced audio.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Drives chunks through a [`Synthesizer`] in order and appends the audio.
pub struct Assembler<S: Synthesizer> {
    synthesizer: S,
    policy: FailurePolicy,
}

impl<S: Synthesizer> Assembler<S> {
    /// Create an assembler with the default failure policy.
    pub fn new(synthesizer: S) -> Self {
        Self {
            synthesizer,
            policy: FailurePolicy::default(),
        }
    }

    /// Set the failure policy.
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Synthesize every chunk in order, appending each result to `sink`.
    ///
    /// `on_progress` is called once per chunk after it has been handled,
    /// including skipped chunks. The sink is flushed before returning.
    pub fn run<W, F>(
        &self,
        chunks: &[String],
        voice: &VoiceConfig,
        sink: &mut W,
        mut on_progress: F,
    ) -> Result<AssemblyReport, EngineError>
    where
        W: Write,
        F: FnMut(&SynthesisJob<'_>),
    {
        let total = chunks.len();
        let mut report = AssemblyReport {
            chunks_total: total,
            ..AssemblyReport::default()
        };

        for (index, text) in chunks.iter().enumerate() {
            let job = SynthesisJob { text, index, total };

            match self.synthesizer.synthesize(text, voice) {
                Ok(audio) => {
                    sink.write_all(&audio)?;
                    report.chunks_written += 1;
                    report.bytes_written += audio.len() as u64;
                    debug!("chunk {}/{}: {} bytes", index + 1, total, audio.len());
                }
                Err(source) => match self.policy {
                    FailurePolicy::Skip => {
                        warn!("chunk {}/{} skipped: {}", index + 1, total, source);
                        report.failed.push(index);
                    }
                    FailurePolicy::Abort => {
                        sink.flush()?;
                        return Err(EngineError::Synthesis { index, source });
                    }
                },
            }

            on_progress(&job);
        }

        sink.flush()?;
        Ok(report)
    }

    /// Create (or truncate) `path` and assemble all chunks into it.
    ///
    /// The file is synced to disk before returning.
    pub fn write_file<F>(
        &self,
        chunks: &[String],
        voice: &VoiceConfig,
        path: &Path,
        on_progress: F,
    ) -> Result<AssemblyReport, EngineError>
    where
        F: FnMut(&SynthesisJob<'_>),
    {
        let mut file = File::create(path)?;
        let report = self.run(chunks, voice, &mut file, on_progress)?;
        file.sync_all()?;
        Ok(report)
    }
}
