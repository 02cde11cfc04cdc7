//! Voice configuration loading from the `key = value` config file.

use std::fmt;
use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;

/// Default gateway volume (0 to 100).
pub const DEFAULT_VOLUME: u8 = 50;

/// Default gateway speech rate (-500 to 500).
pub const DEFAULT_SPEECH_RATE: i32 = 0;

/// Errors that can occur while loading the voice configuration.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Config file not found or unreadable: {0}")]
    NotFound(PathBuf),

    #[error("Config line {line}: [syntax error] missing section name")]
    MissingSectionName { line: usize },

    #[error("Config line {line}: [syntax error] missing '=' or more than one '='")]
    MissingEquals { line: usize },

    #[error("Config line {line}: [value error] '{key}' is not an integer")]
    InvalidNumber { line: usize, key: String },

    #[error("Config is missing required key: {0}")]
    MissingKey(&'static str),
}

/// Synthesis parameters shared by every chunk of every file in a run.
#[derive(Clone, PartialEq)]
pub struct VoiceConfig {
    pub appkey: String,
    pub token: String,
    pub format: String,
    pub voice: String,
    pub speech_rate: i32,
    pub volume: u8,
}

impl fmt::Debug for VoiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceConfig")
            .field("appkey", &self.appkey)
            .field("token", &"<redacted>")
            .field("format", &self.format)
            .field("voice", &self.voice)
            .field("speech_rate", &self.speech_rate)
            .field("volume", &self.volume)
            .finish()
    }
}

impl VoiceConfig {
    /// File extension for synthesized output, taken from the audio format.
    pub fn extension(&self) -> &str {
        &self.format
    }
}

/// Fields collected while scanning; validated once the whole file is read.
#[derive(Default)]
struct PartialConfig {
    appkey: Option<String>,
    token: Option<String>,
    format: Option<String>,
    voice: Option<String>,
    speech_rate: Option<i32>,
    volume: Option<u8>,
}

impl PartialConfig {
    fn set(&mut self, line: usize, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "appkey" => self.appkey = Some(value.to_string()),
            "token" => self.token = Some(value.to_string()),
            "format" => self.format = Some(value.to_string()),
            "voice" => self.voice = Some(value.to_string()),
            "speech_rate" => self.speech_rate = Some(parse_number(line, key, value)?),
            "volume" => self.volume = Some(parse_number(line, key, value)?),
            other => warn!("Config line {line}: ignoring unknown key '{other}'"),
        }
        Ok(())
    }

    fn finish(self) -> Result<VoiceConfig, ConfigError> {
        Ok(VoiceConfig {
            appkey: required(self.appkey, "appkey")?,
            token: required(self.token, "token")?,
            format: required(self.format, "format")?,
            voice: required(self.voice, "voice")?,
            speech_rate: self.speech_rate.unwrap_or(DEFAULT_SPEECH_RATE),
            volume: self.volume.unwrap_or(DEFAULT_VOLUME),
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    line: usize,
    key: &str,
    value: &str,
) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        line,
        key: key.to_string(),
    })
}

fn required(value: Option<String>, key: &'static str) -> Result<String, ConfigError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingKey(key))
}

/// Parse configuration text.
///
/// Blank lines and lines starting with `#` or `;` are skipped. `[section]`
/// headers are validated but do not namespace keys.
pub fn parse_config(source: &str) -> Result<VoiceConfig, ConfigError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut partial = PartialConfig::default();

    for (i, raw) in source.split('\n').enumerate() {
        let line_no = i + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = header
                .strip_suffix(']')
                .ok_or(ConfigError::MissingSectionName { line: line_no })?;
            if name.trim().is_empty() {
                return Err(ConfigError::MissingSectionName { line: line_no });
            }
            continue;
        }

        let parts: Vec<&str> = line.split('=').collect();
        if parts.len() != 2 {
            return Err(ConfigError::MissingEquals { line: line_no });
        }

        partial.set(line_no, parts[0].trim(), parts[1].trim())?;
    }

    partial.finish()
}

/// Read and parse the config file at `path`.
pub fn load_config(path: &Path) -> Result<VoiceConfig, ConfigError> {
    let source =
        std::fs::read_to_string(path).map_err(|_| ConfigError::NotFound(path.to_path_buf()))?;
    parse_config(&source)
}
