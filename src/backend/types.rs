//! Synthesis request types.

use serde::Serialize;
use thiserror::Error;

use crate::config::VoiceConfig;

/// Errors that can occur when calling the synthesis gateway.
#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Query string for one synthesis call.
///
/// Field order matches the gateway's documented parameter order; `text` is
/// percent-escaped by the form encoder.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SynthesisQuery<'a> {
    pub appkey: &'a str,
    pub token: &'a str,
    pub format: &'a str,
    pub voice: &'a str,
    pub volume: u8,
    pub speech_rate: i32,
    pub text: &'a str,
}

impl<'a> SynthesisQuery<'a> {
    /// Build the query for `text` with the given voice parameters.
    pub fn new(text: &'a str, voice: &'a VoiceConfig) -> Self {
        Self {
            appkey: &voice.appkey,
            token: &voice.token,
            format: &voice.format,
            voice: &voice.voice,
            volume: voice.volume,
            speech_rate: voice.speech_rate,
            text,
        }
    }
}
