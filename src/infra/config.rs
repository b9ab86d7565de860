use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::mode::{GameMode, UnknownModeError};
use crate::engine::Game;
use crate::infra::rng::{ConfiguredRng, DeterministicRng, SystemRng};

/// Настройки партии для консольного фронта.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Если задан, раздачи воспроизводимы.
    pub seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Некорректный JSON конфигурации: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Mode(#[from] UnknownModeError),

    #[error("Некорректный seed: {0}")]
    Seed(String),

    #[error("Неизвестный аргумент: {0} (поддерживаются --easy, --hard, --mode=<easy|hard>, --seed=<u64>, --config=<path>)")]
    UnknownArgument(String),
}

impl GameConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Разбор аргументов командной строки (без имени программы).
    ///
    /// `--config=<path>` загружает базу из файла; флаги после него её переопределяют.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = GameConfig::default();

        for arg in args {
            let arg = arg.as_ref();
            if arg == "--easy" {
                config.mode = GameMode::Easy;
            } else if arg == "--hard" {
                config.mode = GameMode::Hard;
            } else if let Some(rest) = arg.strip_prefix("--mode=") {
                config.mode = rest.parse()?;
            } else if let Some(rest) = arg.strip_prefix("--seed=") {
                let seed = rest
                    .parse::<u64>()
                    .map_err(|_| ConfigError::Seed(rest.to_string()))?;
                config.seed = Some(seed);
            } else if let Some(rest) = arg.strip_prefix("--config=") {
                config = Self::from_file(rest)?;
            } else {
                return Err(ConfigError::UnknownArgument(arg.to_string()));
            }
        }

        Ok(config)
    }

    pub fn rng(&self) -> ConfiguredRng {
        match self.seed {
            Some(seed) => ConfiguredRng::Seeded(DeterministicRng::from_seed(seed)),
            None => ConfiguredRng::System(SystemRng),
        }
    }

    /// Начать партию по этой конфигурации.
    pub fn start_game(&self) -> Game<ConfiguredRng> {
        Game::new_game(self.mode, self.rng())
    }
}
