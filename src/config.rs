use std::path::{Path, PathBuf};

use log::warn;

use crate::error::{ConfigError, GameError};
use crate::game::{Game, GameMode, MIN_COLUMNS, MIN_ROWS};

pub use crate::game::MAX_DIMENSION;

/// Board size and mode for new games.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub mode: GameMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: MIN_ROWS,
            columns: MIN_COLUMNS,
            mode: GameMode::HumanVsHuman,
        }
    }
}

impl GameConfig {
    pub fn new_game(&self) -> Result<Game, GameError> {
        Game::new(self.rows, self.columns, self.mode)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SaveConfig {
    pub path: PathBuf,
}

impl Default for SaveConfig {
    fn default() -> Self {
        SaveConfig {
            path: PathBuf::from("savedgame.json"),
        }
    }
}

/// Settings for the computer player.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComputerConfig {
    /// Fixed RNG seed; random if unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub save: SaveConfig,
    pub computer: ComputerConfig,
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
        let game = &self.game;
        if game.rows < MIN_ROWS || game.rows > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "game.rows must be in [{MIN_ROWS}, {MAX_DIMENSION}]"
            )));
        }
        if game.columns < MIN_COLUMNS || game.columns > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "game.columns must be in [{MIN_COLUMNS}, {MAX_DIMENSION}]"
            )));
        }
        if game.columns < game.rows {
            return Err(ConfigError::Validation(
                "game.columns must be >= game.rows".into(),
            ));
        }
        if self.save.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "save.path must not be empty".into(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert!(config.game.new_game().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
columns = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.columns, 9);
        assert_eq!(config.game.rows, 6);
        assert_eq!(config.game.mode, GameMode::HumanVsHuman);
        assert_eq!(config.save.path, PathBuf::from("savedgame.json"));
        assert_eq!(config.computer.seed, None);
    }

    #[test]
    fn test_mode_and_seed_from_toml() {
        let toml_str = r#"
[game]
mode = "HumanVsComputer"

[computer]
seed = 1234
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.mode, GameMode::HumanVsComputer);
        assert_eq!(config.computer.seed, Some(1234));
        let game = config.game.new_game().unwrap();
        assert!(game.other_player().is_computer());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.game.rows, default.game.rows);
        assert_eq!(config.game.columns, default.game.columns);
    }

    #[test]
    fn test_validation_rejects_short_board() {
        let mut config = AppConfig::default();
        config.game.rows = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_narrow_board() {
        let mut config = AppConfig::default();
        config.game.rows = 8;
        config.game.columns = 7;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_huge_board() {
        let mut config = AppConfig::default();
        config.game.columns = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_save_path() {
        let mut config = AppConfig::default();
        config.save.path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.game.rows, 6);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("line_up.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
rows = 7
columns = 10

[save]
path = "games/current.json"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.rows, 7);
        assert_eq!(config.game.columns, 10);
        assert_eq!(config.save.path, PathBuf::from("games/current.json"));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("line_up.toml");
        std::fs::write(&path, "[game]\nrows = 3\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
