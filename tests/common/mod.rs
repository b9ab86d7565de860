//! Общие хелперы для интеграционных тестов движка.
#![allow(dead_code)]

use std::collections::HashSet;

use solitaire_engine::domain::{
    Card, Deck, GameMode, Rank, Suit, COLUMN_COUNT, DECK_SIZE, FOUNDATION_COUNT,
};
use solitaire_engine::engine::{Game, RandomSource};

/// Простой детерминированный RNG для тестов:
/// shuffle ничего не делает => колода остаётся в стандартном порядке.
#[derive(Clone, Debug, Default)]
pub struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }
}

pub fn up(suit: Suit, rank: Rank) -> Card {
    Card::face_up(suit, rank)
}

pub fn down(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Все карты масти от туза до `to` включительно, открытые (как лежат в доме).
pub fn run_of(suit: Suit, to: Rank) -> Vec<Card> {
    Rank::ALL
        .iter()
        .take_while(|r| **r <= to)
        .map(|r| up(suit, *r))
        .collect()
}

pub fn no_columns() -> [Vec<Card>; COLUMN_COUNT] {
    Default::default()
}

pub fn no_foundations() -> [Vec<Card>; FOUNDATION_COUNT] {
    Default::default()
}

/// Собрать партию из раскладки.
///
/// Колода = `drawn` (в этом порядке, курсор стоит сразу за ними) + все
/// оставшиеся карты в каноническом порядке как закрытый стек.
pub fn layout(
    mode: GameMode,
    columns: [Vec<Card>; COLUMN_COUNT],
    foundations: [Vec<Card>; FOUNDATION_COUNT],
    drawn: Vec<Card>,
) -> Game<DummyRng> {
    let placed: Vec<Card> = columns
        .iter()
        .flatten()
        .chain(foundations.iter().flatten())
        .chain(drawn.iter())
        .copied()
        .collect();

    let draw_pile_index = drawn.len();
    let mut cards = drawn;
    cards.extend(Deck::without(&placed).cards);

    Game::from_layout(
        mode,
        DummyRng,
        Deck::from_cards(cards),
        columns,
        foundations,
        draw_pile_index,
    )
    .expect("test layout must hold all 52 cards exactly once")
}

/// Новая партия без перемешивания: раздача из канонической колоды.
///
/// Верхние карты колонок: K♣, J♣, 8♣, 4♣, Q♠, 6♠, Q♦.
/// В колоде остаются A♥..K♥, A♦..J♦ (первой откроется A♥).
pub fn unshuffled_game(mode: GameMode) -> Game<DummyRng> {
    Game::new_game(mode, DummyRng)
}

/// Проверка всех инвариантов доски после завершённой операции.
pub fn assert_invariants<R: RandomSource>(game: &Game<R>) {
    // 52 уникальные карты, каждая ровно в одном месте.
    let all: Vec<&Card> = game
        .deck()
        .cards
        .iter()
        .chain(game.columns().iter().flatten())
        .chain(game.foundations().iter().flatten())
        .collect();
    assert_eq!(all.len(), DECK_SIZE, "card count changed");
    let unique: HashSet<(Suit, Rank)> = all.iter().map(|c| (c.suit, c.rank)).collect();
    assert_eq!(unique.len(), DECK_SIZE, "duplicate card on the board");

    // Закрытые карты только под открытыми, верхняя карта колонки открыта.
    for (i, column) in game.columns().iter().enumerate() {
        if let Some(top) = column.last() {
            assert!(top.face_up, "top of column {i} must be face-up");
        }
        let first_up = column.iter().position(|c| c.face_up).unwrap_or(column.len());
        assert!(
            column[first_up..].iter().all(|c| c.face_up),
            "face-down card above a face-up one in column {i}"
        );
    }

    // Дом: непрерывная серия одной масти от туза, в слоте своей масти.
    for (slot, pile) in game.foundations().iter().enumerate() {
        for (i, card) in pile.iter().enumerate() {
            assert_eq!(card.suit.foundation_slot(), slot);
            assert_eq!(usize::from(card.rank.value()), i + 1);
        }
    }

    assert!(game.draw_pile_index() <= game.deck().len());
    assert!(game.drawn_cards().iter().all(|c| c.face_up));
}
