//! HTTP client for the streaming synthesis gateway.

use std::thread;
use std::time::Duration;

use log::debug;

use crate::config::VoiceConfig;

use super::Synthesizer;
use super::types::{SynthesisError, SynthesisQuery};

/// Public streaming TTS gateway.
pub const DEFAULT_ENDPOINT: &str = "http://nls-gateway.cn-shanghai.aliyuncs.com/stream/v1/tts";

/// Pause after every request before the next one may be issued.
pub const REQUEST_DELAY: Duration = Duration::from_millis(300);

/// Blocking HTTP synthesis client.
pub struct HttpSynthesizer {
    endpoint: String,
    client: reqwest::blocking::Client,
    delay: Duration,
}

impl HttpSynthesizer {
    /// Create a client for the given gateway endpoint.
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: reqwest::blocking::Client::new(),
            delay: REQUEST_DELAY,
        }
    }

    /// Override the post-request delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Get the gateway endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the post-request delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Build the GET request for one chunk.
    pub fn build_request(
        &self,
        text: &str,
        voice: &VoiceConfig,
    ) -> Result<reqwest::blocking::Request, SynthesisError> {
        self.client
            .get(&self.endpoint)
            .query(&SynthesisQuery::new(text, voice))
            .build()
            .map_err(|e| SynthesisError::RequestFailed(e.to_string()))
    }
}

impl Synthesizer for HttpSynthesizer {
    fn synthesize(&self, text: &str, voice: &VoiceConfig) -> Result<Vec<u8>, SynthesisError> {
        let request = self.build_request(text, voice)?;
        debug!("requesting {} characters", text.chars().count());

        let result = self.client.execute(request);

        // Rate limit applies whether or not the call succeeded.
        thread::sleep(self.delay);

        let response = result.map_err(|e| SynthesisError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SynthesisError::RequestFailed(format!(
                "Status: {}",
                response.status()
            )));
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| SynthesisError::InvalidResponse(e.to_string()))
    }
}
