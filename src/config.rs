use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which frontend drives the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frontend {
    /// Line-based prompts on stdin/stdout.
    #[default]
    Text,
    /// Full-screen terminal UI.
    Tui,
}

/// How the board is drawn by the text frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub empty_symbol: char,
    pub yellow_symbol: char,
    pub red_symbol: char,
    /// Print the column numbers under the board.
    pub column_labels: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            empty_symbol: '.',
            yellow_symbol: 'Y',
            red_symbol: 'R',
            column_labels: false,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub frontend: Frontend,
    pub display: DisplayConfig,
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
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let display = &self.display;
        let symbols = [
            ("display.empty_symbol", display.empty_symbol),
            ("display.yellow_symbol", display.yellow_symbol),
            ("display.red_symbol", display.red_symbol),
        ];

        for (name, symbol) in symbols {
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a visible character"
                )));
            }
        }

        if display.yellow_symbol == display.red_symbol {
            return Err(ConfigError::Validation(
                "display.yellow_symbol and display.red_symbol must differ".into(),
            ));
        }
        if display.empty_symbol == display.yellow_symbol
            || display.empty_symbol == display.red_symbol
        {
            return Err(ConfigError::Validation(
                "display.empty_symbol must differ from both player symbols".into(),
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
