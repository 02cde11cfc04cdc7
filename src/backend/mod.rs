//! Communication with the remote synthesis gateway.
//!
//! Provides the [`Synthesizer`] trait and its HTTP implementation. The trait
//! exists so the assembly pipeline can be driven by mocks in tests.

mod client;
mod types;

pub use client::{DEFAULT_ENDPOINT, HttpSynthesizer, REQUEST_DELAY};
pub use types::{SynthesisError, SynthesisQuery};

use crate::config::VoiceConfig;

/// Trait for turning one chunk of text into audio bytes.
#[cfg_attr(test, mockall::automock)]
pub trait Synthesizer: Send + Sync {
    /// Synthesize speech for `text`.
    ///
    /// # Returns
    /// The raw response body, in the audio format configured on `voice`.
    /// A non-2xx response is an error and its body is discarded, so gateway
    /// error payloads never reach the output file.
    fn synthesize(&self, text: &str, voice: &VoiceConfig) -> Result<Vec<u8>, SynthesisError>;
}

/// Create a synthesizer for the given endpoint.
pub fn create_synthesizer(endpoint: &str) -> HttpSynthesizer {
    HttpSynthesizer::new(endpoint)
}
