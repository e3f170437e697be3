use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::game::OpponentMode;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub timing: TimingConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player Two is the computer when set, a second human otherwise.
    pub vs_computer: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { vs_computer: true }
    }
}

impl GameConfig {
    pub fn mode(&self) -> OpponentMode {
        if self.vs_computer {
            OpponentMode::Computer
        } else {
            OpponentMode::Human
        }
    }
}

/// Frame pacing and presentation delays, all in milliseconds.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// How long each frame waits for input.
    pub frame_interval_ms: u64,
    /// Time the falling piece takes to pass one row.
    pub drop_step_ms: u64,
    /// Pause before the computer moves.
    pub computer_delay_ms: u64,
    /// How long the winning line is shown before the play-again prompt.
    pub result_pause_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            frame_interval_ms: 16,
            drop_step_ms: 45,
            computer_delay_ms: 100,
            result_pause_ms: 1500,
        }
    }
}

impl TimingConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn drop_step(&self) -> Duration {
        Duration::from_millis(self.drop_step_ms)
    }

    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    pub fn result_pause(&self) -> Duration {
        Duration::from_millis(self.result_pause_ms)
    }
}

/// Without a `[log]` section the defaults apply. Inside one, leaving out
/// `file` turns logging off.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LogConfig {
    /// Log file path. Logging is off when unset, since the terminal belongs to
    /// the game.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Default filter, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: Some(PathBuf::from("connect-four.log")),
            level: default_log_level(),
        }
    }
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
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.frame_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "timing.frame_interval_ms must be > 0".into(),
            ));
        }
        if self.timing.drop_step_ms == 0 {
            return Err(ConfigError::Validation(
                "timing.drop_step_ms must be > 0".into(),
            ));
        }
        if self.log.level.parse::<tracing::level_filters::LevelFilter>().is_err() {
            return Err(ConfigError::Validation(format!(
                "log.level '{}' is not a valid level (expected off, error, warn, info, debug or trace)",
                self.log.level
            )));
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
        assert_eq!(config.game.mode(), OpponentMode::Computer);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[timing]
drop_step_ms = 80
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.timing.drop_step_ms, 80);
        // Other fields should be defaults
        assert_eq!(config.timing.computer_delay_ms, 100);
        assert!(config.game.vs_computer);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.timing.frame_interval_ms, default.timing.frame_interval_ms);
        assert_eq!(config.log.file, default.log.file);
    }

    #[test]
    fn test_log_section_without_file_disables_logging() {
        let config: AppConfig = toml::from_str("[log]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.log.file, None);
        assert_eq!(config.log.level, "debug");

        let config: AppConfig = toml::from_str("[log]\n").unwrap();
        assert_eq!(config.log.file, None);
        assert_eq!(config.log.level, "info");
        config.validate().unwrap();
    }

    #[test]
    fn test_default_toml_keeps_log_file() {
        let config: AppConfig = toml::from_str(&AppConfig::default_toml()).unwrap();
        assert_eq!(config.log.file, Some(PathBuf::from("connect-four.log")));
    }

    #[test]
    fn test_two_player_mode() {
        let config: AppConfig = toml::from_str("[game]\nvs_computer = false\n").unwrap();
        assert_eq!(config.game.mode(), OpponentMode::Human);
    }

    #[test]
    fn test_validation_rejects_zero_frame_interval() {
        let mut config = AppConfig::default();
        config.timing.frame_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_drop_step() {
        let mut config = AppConfig::default();
        config.timing.drop_step_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_level() {
        let mut config = AppConfig::default();
        config.log.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_delays_are_allowed() {
        let mut config = AppConfig::default();
        config.timing.computer_delay_ms = 0;
        config.timing.result_pause_ms = 0;
        config.validate().expect("zero delays are valid");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.timing.drop_step_ms, 45);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
vs_computer = false

[log]
level = "debug"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(!config.game.vs_computer);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.file, None);
        // Others are defaults
        assert_eq!(config.timing.result_pause_ms, 1500);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[timing]\ndrop_step_ms = 0\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[timing\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }

    #[test]
    fn test_durations() {
        let timing = TimingConfig::default();
        assert_eq!(timing.drop_step(), Duration::from_millis(45));
        assert_eq!(timing.computer_delay(), Duration::from_millis(100));
        assert_eq!(timing.frame_interval(), Duration::from_millis(16));
        assert_eq!(timing.result_pause(), Duration::from_millis(1500));
    }
}
