use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::quiz::question::DIFFICULTIES;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_difficulty")]
    pub default_difficulty: String,
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,
}

fn default_theme() -> String {
    "terminal-default".to_string()
}
fn default_difficulty() -> String {
    "all".to_string()
}
fn default_response_delay_ms() -> u64 {
    500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            default_difficulty: default_difficulty(),
            response_delay_ms: default_response_delay_ms(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shellquiz")
            .join("config.toml")
    }

    /// Clamp and normalize loaded values. Unknown difficulty tags fall back
    /// to "all"; the delay is kept within a range that still reads as a
    /// delay without stalling the transcript.
    pub fn validate(&mut self) {
        if !DIFFICULTIES.contains(&self.default_difficulty.as_str()) {
            self.default_difficulty = default_difficulty();
        }
        self.response_delay_ms = self.response_delay_ms.clamp(0, 5000);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "terminal-default");
        assert_eq!(config.default_difficulty, "all");
        assert_eq!(config.response_delay_ms, 500);
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let config: Config = toml::from_str(r#"theme = "catppuccin-mocha""#).unwrap();
        assert_eq!(config.theme, "catppuccin-mocha");
        assert_eq!(config.default_difficulty, "all");
        assert_eq!(config.response_delay_ms, 500);
    }

    #[test]
    fn toml_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(config.theme, deserialized.theme);
        assert_eq!(config.default_difficulty, deserialized.default_difficulty);
        assert_eq!(config.response_delay_ms, deserialized.response_delay_ms);
    }

    #[test]
    fn validate_resets_unknown_difficulty() {
        let mut config = Config::default();
        config.default_difficulty = "impossible".to_string();
        config.validate();
        assert_eq!(config.default_difficulty, "all");
    }

    #[test]
    fn validate_keeps_known_difficulty() {
        let mut config = Config::default();
        config.default_difficulty = "hard".to_string();
        config.validate();
        assert_eq!(config.default_difficulty, "hard");
    }

    #[test]
    fn validate_clamps_delay() {
        let mut config = Config::default();
        config.response_delay_ms = 600_000;
        config.validate();
        assert_eq!(config.response_delay_ms, 5000);
    }
}
