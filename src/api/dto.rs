use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, CardColor, Rank, Suit};
use crate::domain::mode::GameMode;

/// Карта для фронта. У закрытой карты масть и ранг не раскрываются.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    /// Готовая подпись шириной 3 символа: `A♥ `, `10♠`, `###`.
    pub label: String,
    pub suit: Option<Suit>,
    pub rank: Option<Rank>,
    pub face_up: bool,
    pub red: bool,
}

impl From<&Card> for CardDto {
    fn from(card: &Card) -> Self {
        let visible = card.face_up;
        CardDto {
            label: card.to_string(),
            suit: visible.then_some(card.suit),
            rank: visible.then_some(card.rank),
            face_up: visible,
            red: visible && card.color() == CardColor::Red,
        }
    }
}

/// Полное состояние партии для отображения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    pub mode: GameMode,
    /// Колонки снизу вверх.
    pub columns: Vec<Vec<CardDto>>,
    /// Верхняя карта каждого дома (слоты 0..4: ♦ ♥ ♠ ♣).
    pub foundation_tops: Vec<Option<CardDto>>,
    /// Размер каждого дома.
    pub foundation_sizes: Vec<usize>,
    /// Открытая часть прикупа, последняя: играбельная.
    pub drawn: Vec<CardDto>,
    /// Сколько карт осталось в закрытом стеке.
    pub stock_remaining: usize,
    pub move_count: u32,
    pub undo_available: usize,
    pub is_won: bool,
}
