use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;

/// How the board is drawn by the text and terminal views.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub queen_symbol: char,
    pub empty_symbol: char,
    /// Draw the `A..H` header and `1..8` row labels
    pub show_coordinates: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            queen_symbol: 'X',
            empty_symbol: '#',
            show_coordinates: true,
        }
    }
}

/// Interactive entry settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Re-prompts allowed per queen before giving up; 0 means unlimited
    pub max_attempts_per_queen: usize,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let display = &self.display;
        if display.queen_symbol.is_whitespace() || display.empty_symbol.is_whitespace() {
            return Err(ConfigError::Validation(
                "display symbols must not be whitespace".into(),
            ));
        }
        if display.queen_symbol == display.empty_symbol {
            return Err(ConfigError::Validation(
                "display.queen_symbol must differ from display.empty_symbol".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
