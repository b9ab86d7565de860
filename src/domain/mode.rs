use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Уровень сложности: сколько карт открывается из прикупа за один ход.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Easy,
    Hard,
}

impl GameMode {
    pub const fn draw_count(self) -> usize {
        match self {
            GameMode::Easy => 1,
            GameMode::Hard => 3,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Easy => f.write_str("easy"),
            GameMode::Hard => f.write_str("hard"),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Неизвестный режим игры: {0} (ожидается easy или hard)")]
pub struct UnknownModeError(pub String);

impl FromStr for GameMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "e" | "1" => Ok(GameMode::Easy),
            "hard" | "h" | "3" => Ok(GameMode::Hard),
            _ => Err(UnknownModeError(s.to_string())),
        }
    }
}
