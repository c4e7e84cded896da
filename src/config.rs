use crate::audio::Effect;
use crate::consts;
use enum_map::{enum_map, EnumMap};
use log::LevelFilter;
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Gameplay settings
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Which sound effects to play
    #[serde(default)]
    pub(crate) sound: SoundConfig,

    /// Where & how much to log
    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join(consts::APP_DIR_NAME).join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Return the configuration file path given by the environment, or the
    /// default path if none is set
    pub(crate) fn path() -> Result<PathBuf, ConfigError> {
        Config::path_from_env(std::env::var_os(consts::CONFIG_PATH_ENV))
    }

    /// An unset or empty override means the default path
    fn path_from_env(value: Option<OsString>) -> Result<PathBuf, ConfigError> {
        match value {
            Some(p) if !p.is_empty() => Ok(PathBuf::from(p)),
            _ => Config::default_path(),
        }
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    /// Number of grid cells across the screen
    pub(crate) cells_wide: u32,

    /// Number of times per second that the snake moves
    pub(crate) updates_per_second: u32,

    /// The longest the snake can grow
    pub(crate) snake_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            cells_wide: consts::CELLS_WIDE,
            updates_per_second: consts::UPDATES_PER_SECOND,
            snake_capacity: consts::SNAKE_CAPACITY,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    cells_wide: u32,
    updates_per_second: u32,
    snake_capacity: usize,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        let GameConfig {
            cells_wide,
            updates_per_second,
            snake_capacity,
        } = GameConfig::default();
        RawGameConfig {
            cells_wide,
            updates_per_second,
            snake_capacity,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameConfigError;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, GameConfigError> {
        if value.cells_wide < 3 {
            return Err(GameConfigError::TooFewCells(value.cells_wide));
        }
        if value.updates_per_second == 0 {
            return Err(GameConfigError::NoUpdates);
        }
        if value.snake_capacity == 0 {
            return Err(GameConfigError::NoCapacity);
        }
        Ok(GameConfig {
            cells_wide: value.cells_wide,
            updates_per_second: value.updates_per_second,
            snake_capacity: value.snake_capacity,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum GameConfigError {
    #[error("cells-wide must be at least 3, got {0}")]
    TooFewCells(u32),
    #[error("updates-per-second must be positive")]
    NoUpdates,
    #[error("snake-capacity must be positive")]
    NoCapacity,
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct SoundConfig {
    food_consumed: bool,
    snake_died: bool,
}

impl SoundConfig {
    pub(crate) fn enabled(self) -> EnumMap<Effect, bool> {
        enum_map! {
            Effect::FoodConsumed => self.food_consumed,
            Effect::SnakeDied => self.snake_died,
        }
    }
}

impl Default for SoundConfig {
    fn default() -> SoundConfig {
        SoundConfig {
            food_consumed: true,
            snake_died: true,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct LogConfig {
    /// File to write log messages to
    file: Option<PathBuf>,

    /// Least severe level of message to log
    pub(crate) level: LevelFilter,
}

impl LogConfig {
    /// Return the log file path: the one given in the configuration or, if
    /// that is not set, one in the local data directory.  Returns `None` if no
    /// path is configured and the data directory could not be determined.
    pub(crate) fn file(&self) -> Option<PathBuf> {
        self.file.clone().or_else(|| {
            dirs::data_local_dir().map(|p| {
                p.join(consts::APP_DIR_NAME)
                    .join(format!("{}.log", consts::APP_DIR_NAME))
            })
        })
    }
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
