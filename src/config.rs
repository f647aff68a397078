/// Runtime configuration
///
/// Everything comes from environment variables (a `.env` file is loaded by
/// the binary before this runs). Unset values fall back to defaults.

use crate::error::{AssistantError, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_NAME: &str = "Your Personal AI";
const DEFAULT_CITY: &str = "New York";
const DEFAULT_LISTEN_TIMEOUT_SECS: u64 = 5;
const DATA_DIR: &str = ".pocket-assistant";
const DATA_FILE: &str = "user_data.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Shown in the start-up banner
    pub name: String,
    /// Where the user state document lives
    pub data_file: PathBuf,
    /// OpenWeatherMap key; `None` leaves weather unconfigured
    pub weather_api_key: Option<String>,
    /// City used when `weather` gets no arguments
    pub default_city: String,
    /// Upper bound on one voice capture
    pub listen_timeout: Duration,
    /// External speech-to-text command
    pub stt_command: Option<String>,
    /// External text-to-speech command
    pub tts_command: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            data_file: default_data_file(),
            weather_api_key: None,
            default_city: DEFAULT_CITY.to_string(),
            listen_timeout: Duration::from_secs(DEFAULT_LISTEN_TIMEOUT_SECS),
            stt_command: None,
            tts_command: None,
        }
    }
}

impl Config {
    /// Build the config from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let listen_timeout = match get("ASSISTANT_LISTEN_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|_| {
                    AssistantError::Config(format!(
                        "ASSISTANT_LISTEN_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                        raw
                    ))
                })?;
                Duration::from_secs(secs)
            }
            None => defaults.listen_timeout,
        };

        Ok(Self {
            name: get("ASSISTANT_NAME").unwrap_or(defaults.name),
            data_file: get("ASSISTANT_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            weather_api_key: get("OPENWEATHER_API_KEY"),
            default_city: get("ASSISTANT_DEFAULT_CITY").unwrap_or(defaults.default_city),
            listen_timeout,
            stt_command: get("ASSISTANT_STT_COMMAND"),
            tts_command: get("ASSISTANT_TTS_COMMAND"),
        })
    }
}

/// `~/.pocket-assistant/user_data.json`, or `./user_data.json` without a home
fn default_data_file() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(DATA_DIR).join(DATA_FILE),
        None => PathBuf::from(DATA_FILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.name, "Your Personal AI");
        assert_eq!(config.default_city, "New York");
        assert_eq!(config.listen_timeout, Duration::from_secs(5));
        assert!(config.weather_api_key.is_none());
        assert!(config.data_file.ends_with("user_data.json"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("ASSISTANT_DATA_FILE", "/tmp/state.json"),
            ("OPENWEATHER_API_KEY", "k3y"),
            ("ASSISTANT_LISTEN_TIMEOUT_SECS", "12"),
            ("ASSISTANT_TTS_COMMAND", "espeak"),
        ]))
        .unwrap();

        assert_eq!(config.data_file, PathBuf::from("/tmp/state.json"));
        assert_eq!(config.weather_api_key.as_deref(), Some("k3y"));
        assert_eq!(config.listen_timeout, Duration::from_secs(12));
        assert_eq!(config.tts_command.as_deref(), Some("espeak"));
        assert!(config.stt_command.is_none());
    }

    #[test]
    fn test_blank_key_is_unset() {
        let config = Config::from_lookup(lookup(&[("OPENWEATHER_API_KEY", "  ")])).unwrap();
        assert!(config.weather_api_key.is_none());
    }

    #[test]
    fn test_bad_timeout_is_config_error() {
        let result = Config::from_lookup(lookup(&[("ASSISTANT_LISTEN_TIMEOUT_SECS", "soon")]));
        match result {
            Err(AssistantError::Config(msg)) => assert!(msg.contains("soon")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
