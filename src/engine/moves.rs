use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Выполненный ход: всё, что нужно, чтобы в точности его отменить.
///
/// Создаётся в момент успешной операции, один раз потребляется `Game::undo`
/// и после создания не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Move {
    /// Серия открытых карт перенесена из колонки в колонку.
    ColumnToColumn {
        /// Перенесённые карты в исходном порядке (снизу вверх).
        cards: Vec<Card>,
        from_column: usize,
        to_column: usize,
        /// Была ли открыта карта, ставшая новой верхней в исходной колонке.
        last_card_was_face_up: bool,
    },

    /// Открытая карта прикупа положена в колонку.
    PileToColumn { card: Card, to_column: usize },

    /// Верхняя карта колонки положена в дом.
    ColumnToEnding {
        card: Card,
        from_column: usize,
        to_stack: usize,
        last_card_was_face_up: bool,
    },

    /// Верхняя карта дома возвращена в колонку.
    EndingToColumn {
        card: Card,
        from_stack: usize,
        to_column: usize,
    },

    /// Открытая карта прикупа положена в дом.
    PileToEnding { card: Card, to_stack: usize },

    /// Из прикупа открыты карты; хранится позиция курсора до хода.
    Draw { previous_draw_index: usize },
}

/// Вид хода без полезной нагрузки: для логов и отображения.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MoveKind {
    ColumnToColumn,
    PileToColumn,
    ColumnToEnding,
    EndingToColumn,
    PileToEnding,
    Draw,
}

impl Move {
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::ColumnToColumn { .. } => MoveKind::ColumnToColumn,
            Move::PileToColumn { .. } => MoveKind::PileToColumn,
            Move::ColumnToEnding { .. } => MoveKind::ColumnToEnding,
            Move::EndingToColumn { .. } => MoveKind::EndingToColumn,
            Move::PileToEnding { .. } => MoveKind::PileToEnding,
            Move::Draw { .. } => MoveKind::Draw,
        }
    }

    /// Сколько карт затронул ход (для `Draw`: ноль, карты не перемещаются).
    pub fn card_count(&self) -> usize {
        match self {
            Move::ColumnToColumn { cards, .. } => cards.len(),
            Move::Draw { .. } => 0,
            _ => 1,
        }
    }
}

impl fmt::Display for Move {
    /// Человекочитаемое описание, индексы с единицы.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::ColumnToColumn {
                cards,
                from_column,
                to_column,
                ..
            } => match (cards.first(), cards.last()) {
                (Some(first), Some(last)) if cards.len() > 1 => write!(
                    f,
                    "Колонка {}: {}..{} -> колонка {}",
                    from_column + 1,
                    first.label(),
                    last.label(),
                    to_column + 1
                ),
                (Some(first), _) => write!(
                    f,
                    "Колонка {}: {} -> колонка {}",
                    from_column + 1,
                    first.label(),
                    to_column + 1
                ),
                _ => write!(f, "Колонка {} -> колонка {}", from_column + 1, to_column + 1),
            },
            Move::PileToColumn { card, to_column } => {
                write!(f, "Прикуп: {} -> колонка {}", card.label(), to_column + 1)
            }
            Move::ColumnToEnding {
                card,
                from_column,
                to_stack,
                ..
            } => write!(
                f,
                "Колонка {}: {} -> дом {}",
                from_column + 1,
                card.label(),
                to_stack + 1
            ),
            Move::EndingToColumn {
                card,
                from_stack,
                to_column,
            } => write!(
                f,
                "Дом {}: {} -> колонка {}",
                from_stack + 1,
                card.label(),
                to_column + 1
            ),
            Move::PileToEnding { card, to_stack } => {
                write!(f, "Прикуп: {} -> дом {}", card.label(), to_stack + 1)
            }
            Move::Draw { .. } => f.write_str("Открыть карты из прикупа"),
        }
    }
}
