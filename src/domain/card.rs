use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,   // ♥
    Diamonds, // ♦
    Spades,   // ♠
    Clubs,    // ♣
}

/// Цветовой класс масти. Для правил важно только то, что классов ровно два.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardColor {
    Red,
    Black,
}

impl Suit {
    /// Канонический порядок мастей при сборке колоды.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    pub const fn color(self) -> CardColor {
        match self {
            Suit::Diamonds | Suit::Hearts => CardColor::Red,
            Suit::Spades | Suit::Clubs => CardColor::Black,
        }
    }

    /// Фиксированный слот в "доме" (foundation) для масти.
    pub const fn foundation_slot(self) -> usize {
        match self {
            Suit::Diamonds => 0,
            Suit::Hearts => 1,
            Suit::Spades => 2,
            Suit::Clubs => 3,
        }
    }

    /// Unicode-глиф масти для отображения.
    pub const fn glyph(self) -> &'static str {
        SUIT_GLYPHS[self as usize]
    }
}

/// Таблица глифов в порядке объявления `Suit`.
const SUIT_GLYPHS: [&str; 4] = ["\u{2665}", "\u{2666}", "\u{2660}", "\u{2663}"];

/// Ранг карты: туз младший (1), король старший (13).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Числовое значение 1..=13.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// `self` ровно на единицу младше `other` (например, 7 под 8).
    pub const fn is_one_below(self, other: Rank) -> bool {
        self.value() + 1 == other.value()
    }

    /// Короткая подпись ранга ("A", "2".."10", "J", "Q", "K").
    pub const fn label(self) -> &'static str {
        RANK_LABELS[self as usize - 1]
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }
}

const RANK_LABELS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// Карта пасьянса.
///
/// Идентичность карты: пара (масть, ранг), в колоде она уникальна.
/// `face_up`: изменяемое состояние конкретного экземпляра, в идентичность не входит,
/// поэтому для сравнения "та же ли это карта" используйте [`Card::same_card`].
/// Derive `PartialEq` сравнивает и флаг тоже: это нужно для снапшотов доски.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// Новая карта рубашкой вверх.
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Новая открытая карта.
    pub const fn face_up(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
        }
    }

    pub const fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub fn same_card(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }

    pub fn is_opposite_color(&self, other: &Card) -> bool {
        self.color() != other.color()
    }

    pub const fn is_king(&self) -> bool {
        matches!(self.rank, Rank::King)
    }

    pub const fn is_ace(&self) -> bool {
        matches!(self.rank, Rank::Ace)
    }

    /// Подпись без учёта флага: `A♥`, `10♠`.
    pub fn label(&self) -> String {
        format!("{}{}", self.rank.label(), self.suit.glyph())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Card {
    /// Ширина всегда 3 символа: `A♥ `, `10♠`, а закрытая карта: `###`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.face_up {
            return f.write_str("###");
        }
        if self.rank == Rank::Ten {
            write!(f, "{}{}", self.rank, self.suit)
        } else {
            write!(f, "{}{} ", self.rank, self.suit)
        }
    }
}

/// Ошибка разбора строкового представления карты.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CardParseError {
    #[error("Неверный ранг: {0}")]
    InvalidRank(String),

    #[error("Неверная масть: {0}")]
    InvalidSuit(String),

    #[error("Пустая строка карты")]
    Empty,
}

/// Парсинг строк вида "A♥", "10s", "Kd", "qc". Результат: открытая карта.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_ch = s.chars().last().ok_or(CardParseError::Empty)?;
        let rank_str = &s[..s.len() - suit_ch.len_utf8()];

        let suit = match suit_ch {
            'h' | 'H' | '\u{2665}' => Suit::Hearts,
            'd' | 'D' | '\u{2666}' => Suit::Diamonds,
            's' | 'S' | '\u{2660}' => Suit::Spades,
            'c' | 'C' | '\u{2663}' => Suit::Clubs,
            other => return Err(CardParseError::InvalidSuit(other.to_string())),
        };

        let rank = match rank_str.to_ascii_uppercase().as_str() {
            "A" | "1" => Rank::Ace,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "T" => Rank::Ten,
            digits => digits
                .parse::<u8>()
                .ok()
                .and_then(Rank::from_value)
                .ok_or_else(|| CardParseError::InvalidRank(rank_str.to_string()))?,
        };

        Ok(Card::face_up(suit, rank))
    }
}
