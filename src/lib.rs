//! Движок консольного пасьянса "Косынка" (Klondike).
//!
//! Слои:
//! - `domain`: карты, колода, режим игры, рейтинг;
//! - `engine`: правила ходов, журнал отмены, состояние партии;
//! - `infra`: RNG и конфигурация;
//! - `api`: команды, DTO и текстовая отрисовка для внешнего слоя.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use domain::{Card, GameMode, Rank, Suit};
pub use engine::{Game, Move, MoveError};
