use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Количество карт в стандартной колоде.
pub const DECK_SIZE: usize = 52;

/// Колода карт. В домене: просто упорядоченный список карт.
///
/// После раздачи здесь остаются карты прикупа: курсор `draw_pile_index`
/// (живёт в `Game`) делит их на открытую часть и закрытый стек.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Hearts A..K, Diamonds A..K, Spades A..K, Clubs A..K.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Deck { cards }
    }

    /// Стандартная колода, сразу перемешанная.
    pub fn new_shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Self::standard_52();
        deck.shuffle(rng);
        deck
    }

    /// Колода из всех стандартных карт, кроме уже разложенных `placed`.
    /// Порядок канонический; флаги: открытые, как у карт прикупа.
    pub fn without(placed: &[Card]) -> Self {
        let cards = Self::standard_52()
            .cards
            .into_iter()
            .filter(|c| !placed.iter().any(|p| p.same_card(c)))
            .map(|c| Card { face_up: true, ..c })
            .collect();
        Deck { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    /// Перемешивание на месте через внешний источник случайности.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Взять одну карту сверху колоды (с конца списка).
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Вынуть карту по индексу. `None`, если индекс вне колоды.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Вставить карту по индексу (индекс зажимается длиной колоды).
    pub fn insert(&mut self, index: usize, card: Card) {
        let index = index.min(self.cards.len());
        self.cards.insert(index, card);
    }
}
