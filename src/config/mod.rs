//! Voice configuration.
//!
//! Loads the credentials and voice parameters sent with every synthesis
//! request from a plain `key = value` file.

mod voice;

pub use voice::{
    ConfigError, DEFAULT_SPEECH_RATE, DEFAULT_VOLUME, VoiceConfig, load_config, parse_config,
};

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID: &str = "\
# gateway credentials
[auth]
appkey = my-app
token = secret-token

; voice parameters
[voice]
format = mp3
voice = xiaoyun
speech_rate = -120
volume = 80
";

    // ===========================================
    // parse_config tests
    // ===========================================

    #[test]
    fn test_parse_valid_config() {
        let config = parse_config(VALID).unwrap();

        assert_eq!(config.appkey, "my-app");
        assert_eq!(config.token, "secret-token");
        assert_eq!(config.format, "mp3");
        assert_eq!(config.voice, "xiaoyun");
        assert_eq!(config.speech_rate, -120);
        assert_eq!(config.volume, 80);
        assert_eq!(config.extension(), "mp3");
    }

    #[test]
    fn test_parse_defaults_rate_and_volume() {
        let config = parse_config("appkey=a\ntoken=t\nformat=wav\nvoice=v\n").unwrap();

        assert_eq!(config.speech_rate, DEFAULT_SPEECH_RATE);
        assert_eq!(config.volume, DEFAULT_VOLUME);
    }

    #[test]
    fn test_parse_missing_equals_reports_line() {
        let source = "appkey = a\ntoken = t\n\nvoice xiaoyun\n";
        let result = parse_config(source);

        assert_eq!(result.unwrap_err(), ConfigError::MissingEquals { line: 4 });
    }

    #[test]
    fn test_parse_duplicate_equals_reports_line() {
        let result = parse_config("appkey = a = b\n");

        assert_eq!(result.unwrap_err(), ConfigError::MissingEquals { line: 1 });
    }

    #[test]
    fn test_parse_unclosed_section() {
        let result = parse_config("# header\n[voice\nvoice = x\n");

        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingSectionName { line: 2 }
        );
    }

    #[test]
    fn test_parse_empty_section_name() {
        let result = parse_config("[  ]\n");

        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingSectionName { line: 1 }
        );
    }

    #[test]
    fn test_parse_invalid_number() {
        let result = parse_config("appkey=a\nvolume = loud\n");

        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidNumber {
                line: 2,
                key: "volume".to_string()
            }
        );
    }

    #[test]
    fn test_parse_missing_required_key() {
        let result = parse_config("appkey=a\nformat=mp3\nvoice=v\n");

        assert_eq!(result.unwrap_err(), ConfigError::MissingKey("token"));
    }

    #[test]
    fn test_parse_empty_required_value() {
        let result = parse_config("appkey=\ntoken=t\nformat=mp3\nvoice=v\n");

        assert_eq!(result.unwrap_err(), ConfigError::MissingKey("appkey"));
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let config = parse_config("appkey=a\ntoken=t\nformat=mp3\nvoice=v\nsample_rate=16000\n");

        assert!(config.is_ok());
    }

    #[test]
    fn test_parse_handles_crlf() {
        let config = parse_config("appkey=a\r\ntoken=t\r\nformat=mp3\r\nvoice=v\r\n").unwrap();

        assert_eq!(config.voice, "v");
    }

    #[test]
    fn test_parse_strips_leading_bom() {
        let source = "\u{feff}# voice\nappkey=a\ntoken=t\nformat=mp3\nvoice=v\n";
        let config = parse_config(source).unwrap();

        assert_eq!(config.appkey, "a");
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = parse_config(VALID).unwrap();
        let debug = format!("{config:?}");

        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
    }

    // ===========================================
    // load_config tests
    // ===========================================

    #[test]
    fn test_load_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("conf.ini");
        std::fs::write(&path, VALID).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.voice, "xiaoyun");
    }

    #[test]
    fn test_load_config_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.ini");

        let result = load_config(&path);
        assert_eq!(result.unwrap_err(), ConfigError::NotFound(path));
    }
}
