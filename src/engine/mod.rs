//! Движок пасьянса: правила ходов, журнал отмены, состояние партии.
//!
//! Высокоуровневый объект: `Game`
//! Основные операции:
//!   - `new_game` – перемешать колоду и разложить семь колонок
//!   - `draw_cards` – открыть карты из прикупа
//!   - `move_*` – пять видов переноса карт
//!   - `undo` – точная отмена последнего хода (глубина журнала ограничена)

pub mod errors;
pub mod game;
pub mod moves;
pub mod undo;
pub mod validation;

pub use errors::MoveError;
pub use game::{BoardSnapshot, Game, LayoutError};
pub use moves::{Move, MoveKind};
pub use undo::{UndoLog, UNDO_CAPACITY};

/// Источник случайности для движка.
/// Реализации лежат в infra (обёртки над `rand`), в тестах можно подставить свою.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
