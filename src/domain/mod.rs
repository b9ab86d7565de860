//! Доменная модель пасьянса: карты, колода, режим игры, рейтинг.

pub mod card;
pub mod deck;
pub mod mode;
pub mod scoreboard;

/// Количество колонок на столе (tableau).
pub const COLUMN_COUNT: usize = 7;

/// Количество "домов" (foundation), по одному на масть.
pub const FOUNDATION_COUNT: usize = 4;

/// Сколько карт в полностью собранном доме.
pub const FOUNDATION_FULL: usize = 13;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use mode::*;
pub use scoreboard::*;
