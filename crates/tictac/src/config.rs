//! Game configuration: defaults, optional TOML file, CLI overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_board::Marker;
use tracing::{debug, info, instrument};

/// Display names for the two players.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerNames {
    /// Name shown for the X player.
    #[serde(default)]
    x: Option<String>,

    /// Name shown for the O player.
    #[serde(default)]
    o: Option<String>,
}

impl PlayerNames {
    /// Label used when announcing `marker`: the configured name, or the marker itself.
    pub fn label(&self, marker: Marker) -> String {
        let name = match marker {
            Marker::X => self.x.as_deref(),
            Marker::O => self.o.as_deref(),
        };
        match name {
            Some(name) => format!("{} ({})", name, marker),
            None => marker.to_string(),
        }
    }
}

/// Configuration for a terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Clear the terminal before drawing the board.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,

    /// Player display names.
    #[serde(default)]
    players: PlayerNames,
}

fn default_clear_screen() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            clear_screen: default_clear_screen(),
            players: PlayerNames::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Builds the effective configuration for a CLI invocation.
    ///
    /// Starts from defaults, layers the config file when it exists, then
    /// applies command-line overrides.
    #[instrument(skip(cli), fields(config_path = %cli.config.display()))]
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = if cli.config.exists() {
            Self::from_file(&cli.config)?
        } else {
            info!("Config file not found, using defaults");
            Self::default()
        };
        config.apply_overrides(cli);
        Ok(config)
    }

    /// Applies command-line overrides on top of file or default values.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if cli.no_clear {
            self.clear_screen = false;
        }
        if let Some(name) = &cli.player_x {
            self.players.x = Some(name.clone());
        }
        if let Some(name) = &cli.player_o {
            self.players.o = Some(name.clone());
        }
        debug!(config = ?self, "Effective configuration");
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert!(*config.clear_screen());
        assert_eq!(config.players(), &PlayerNames::default());
        assert_eq!(config.players().label(Marker::X), "X");
    }

    #[test]
    fn test_parse_toml() {
        let config = GameConfig::from_toml(
            r#"
            clear_screen = false

            [players]
            x = "Ada"
            "#,
        )
        .unwrap();
        assert!(!*config.clear_screen());
        assert_eq!(config.players().x().as_deref(), Some("Ada"));
        assert_eq!(config.players().o(), &None);
        assert_eq!(config.players().label(Marker::X), "Ada (X)");
        assert_eq!(config.players().label(Marker::O), "O");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(GameConfig::from_toml("").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = GameConfig::from_toml("clear_screen = \"sometimes\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let mut config = GameConfig::from_toml("[players]\nx = \"Ada\"\no = \"Grace\"").unwrap();
        let cli = Cli::parse_from(["tictac", "--no-clear", "--player-o", "Linus"]);
        config.apply_overrides(&cli);

        assert!(!*config.clear_screen());
        assert_eq!(config.players().x().as_deref(), Some("Ada"));
        assert_eq!(config.players().o().as_deref(), Some("Linus"));
    }
}
