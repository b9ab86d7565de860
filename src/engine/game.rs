use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::card::Card;
use crate::domain::deck::{Deck, DECK_SIZE};
use crate::domain::mode::GameMode;
use crate::domain::{COLUMN_COUNT, FOUNDATION_COUNT, FOUNDATION_FULL};
use crate::engine::errors::MoveError;
use crate::engine::moves::Move;
use crate::engine::undo::UndoLog;
use crate::engine::validation::{
    check_column_index, check_stack_index, validate_column_placement,
    validate_foundation_placement, validate_onto_top,
};
use crate::engine::RandomSource;
use crate::infra::rng::{DeterministicRng, SystemRng};

/// Снимок всей раскладки: колода с курсором, колонки, дома и счётчик ходов.
///
/// Удобен для отображения и для проверки, что отмена хода вернула доску
/// в точности в прежнее состояние (включая флаги открытости карт).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub deck: Deck,
    pub columns: [Vec<Card>; COLUMN_COUNT],
    pub foundations: [Vec<Card>; FOUNDATION_COUNT],
    pub draw_pile_index: usize,
    pub move_count: u32,
}

/// Ошибки сборки партии из готовой раскладки (`Game::from_layout`).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("В раскладке {0} карт, ожидается 52")]
    CardCount(usize),

    #[error("Карта {0} встречается в раскладке дважды")]
    DuplicateCard(String),

    #[error("Курсор прикупа {index} больше длины колоды {len}")]
    DrawIndexOutOfRange { index: usize, len: usize },

    #[error("Карта {card} лежит не в своём доме {slot}")]
    WrongFoundation { card: String, slot: usize },

    #[error("Дом {slot} не является серией от туза без пропусков")]
    BrokenFoundation { slot: usize },

    #[error("Верхняя карта колонки {column} закрыта")]
    FaceDownTop { column: usize },
}

/// Состояние одной партии.
///
/// Каждая карта в любой момент лежит ровно в одном месте: в колоде
/// (открытая часть `[0, draw_pile_index)` или закрытый стек), в одной из
/// семи колонок или в одном из четырёх домов.
#[derive(Clone, Debug)]
pub struct Game<R: RandomSource = SystemRng> {
    mode: GameMode,
    deck: Deck,
    columns: [Vec<Card>; COLUMN_COUNT],
    foundations: [Vec<Card>; FOUNDATION_COUNT],
    draw_pile_index: usize,
    move_count: u32,
    undo_log: UndoLog,
    rng: R,
}

impl Game<SystemRng> {
    /// Новая партия на системном RNG.
    pub fn new(mode: GameMode) -> Self {
        Self::new_game(mode, SystemRng::default())
    }
}

impl Game<DeterministicRng> {
    /// Воспроизводимая партия: одинаковый seed даёт одинаковую раздачу.
    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        Self::new_game(mode, DeterministicRng::from_seed(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Старт новой партии:
    /// - собирает и перемешивает колоду;
    /// - раскладывает в колонку i ровно i+1 карт, верхняя открыта, остальные закрыты;
    /// - остаток колоды становится прикупом, курсор на нуле.
    pub fn new_game(mode: GameMode, mut rng: R) -> Self {
        let mut deck = Deck::new_shuffled(&mut rng);
        let mut columns: [Vec<Card>; COLUMN_COUNT] = Default::default();

        for (i, column) in columns.iter_mut().enumerate() {
            for _ in 0..=i {
                let Some(mut card) = deck.draw_one() else {
                    break;
                };
                card.face_up = false;
                column.push(card);
            }
            if let Some(top) = column.last_mut() {
                top.face_up = true;
            }
        }

        // Видимость прикупа задаётся курсором, сами карты в колоде всегда открыты.
        for card in deck.cards.iter_mut() {
            card.face_up = true;
        }

        info!(target: "engine.game", %mode, stock = deck.len(), "новая партия разложена");

        Self {
            mode,
            deck,
            columns,
            foundations: Default::default(),
            draw_pile_index: 0,
            move_count: 0,
            undo_log: UndoLog::new(),
            rng,
        }
    }

    /// Собрать партию из готовой раскладки (тесты, отладка, реплей).
    ///
    /// Проверяет, что все 52 карты присутствуют ровно по одному разу,
    /// курсор не выходит за колоду, каждый дом собран в слоте своей масти
    /// от туза подряд, а верхняя карта любой непустой колонки открыта.
    pub fn from_layout(
        mode: GameMode,
        rng: R,
        deck: Deck,
        columns: [Vec<Card>; COLUMN_COUNT],
        foundations: [Vec<Card>; FOUNDATION_COUNT],
        draw_pile_index: usize,
    ) -> Result<Self, LayoutError> {
        let all = deck
            .cards
            .iter()
            .chain(columns.iter().flatten())
            .chain(foundations.iter().flatten());

        let mut seen = HashSet::with_capacity(DECK_SIZE);
        let mut total = 0;
        for card in all {
            total += 1;
            if !seen.insert((card.suit, card.rank)) {
                return Err(LayoutError::DuplicateCard(card.label()));
            }
        }
        if total != DECK_SIZE {
            return Err(LayoutError::CardCount(total));
        }

        if draw_pile_index > deck.len() {
            return Err(LayoutError::DrawIndexOutOfRange {
                index: draw_pile_index,
                len: deck.len(),
            });
        }

        for (slot, pile) in foundations.iter().enumerate() {
            if let Some(card) = pile.iter().find(|c| c.suit.foundation_slot() != slot) {
                return Err(LayoutError::WrongFoundation {
                    card: card.label(),
                    slot,
                });
            }
            let ascending = pile
                .iter()
                .enumerate()
                .all(|(i, card)| usize::from(card.rank.value()) == i + 1);
            if !ascending {
                return Err(LayoutError::BrokenFoundation { slot });
            }
        }

        for (column, cards) in columns.iter().enumerate() {
            if cards.last().is_some_and(|top| !top.face_up) {
                return Err(LayoutError::FaceDownTop { column });
            }
        }

        Ok(Self {
            mode,
            deck,
            columns,
            foundations,
            draw_pile_index,
            move_count: 0,
            undo_log: UndoLog::new(),
            rng,
        })
    }

    // ----- Чтение состояния -----

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn columns(&self) -> &[Vec<Card>; COLUMN_COUNT] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&[Card]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    pub fn column_top(&self, index: usize) -> Option<&Card> {
        self.columns.get(index).and_then(|c| c.last())
    }

    pub fn foundations(&self) -> &[Vec<Card>; FOUNDATION_COUNT] {
        &self.foundations
    }

    pub fn foundation_top(&self, slot: usize) -> Option<&Card> {
        self.foundations.get(slot).and_then(|f| f.last())
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn draw_pile_index(&self) -> usize {
        self.draw_pile_index
    }

    /// Открытая часть прикупа, последняя карта: играбельная.
    pub fn drawn_cards(&self) -> &[Card] {
        &self.deck.cards[..self.draw_pile_index]
    }

    /// Сколько карт осталось в закрытом стеке.
    pub fn stock_len(&self) -> usize {
        self.deck.len() - self.draw_pile_index
    }

    /// Единственная карта прикупа, которую можно сыграть.
    pub fn playable_pile_card(&self) -> Option<&Card> {
        self.draw_pile_index
            .checked_sub(1)
            .and_then(|i| self.deck.get(i))
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Сколько ходов сейчас можно отменить.
    pub fn undo_depth(&self) -> usize {
        self.undo_log.len()
    }

    pub fn undo_log(&self) -> &UndoLog {
        &self.undo_log
    }

    /// Забрать RNG у законченной партии, чтобы следующая продолжила ту же последовательность.
    pub fn into_rng(self) -> R {
        self.rng
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            deck: self.deck.clone(),
            columns: self.columns.clone(),
            foundations: self.foundations.clone(),
            draw_pile_index: self.draw_pile_index,
            move_count: self.move_count,
        }
    }

    /// Победа: во всех четырёх домах по 13 карт.
    pub fn check_if_win(&self) -> bool {
        self.foundations.iter().all(|f| f.len() == FOUNDATION_FULL)
    }

    // ----- Ходы (молчаливые: отклонённый ход просто ничего не меняет) -----

    pub fn draw_cards(&mut self) {
        let result = self.try_draw_cards();
        log_rejected("draw_cards", result);
    }

    pub fn move_from_pile_to_column(&mut self, to_column: usize) {
        let result = self.try_move_from_pile_to_column(to_column);
        log_rejected("move_from_pile_to_column", result);
    }

    pub fn move_between_columns(&mut self, from_column: usize, from_row: usize, to_column: usize) {
        let result = self.try_move_between_columns(from_column, from_row, to_column);
        log_rejected("move_between_columns", result);
    }

    pub fn move_from_column_to_ending_stack(&mut self, from_column: usize) {
        let result = self.try_move_from_column_to_ending_stack(from_column);
        log_rejected("move_from_column_to_ending_stack", result);
    }

    pub fn move_from_ending_stack_to_column(&mut self, from_stack: usize, to_column: usize) {
        let result = self.try_move_from_ending_stack_to_column(from_stack, to_column);
        log_rejected("move_from_ending_stack_to_column", result);
    }

    pub fn move_from_pile_to_ending_stack(&mut self) {
        let result = self.try_move_from_pile_to_ending_stack();
        log_rejected("move_from_pile_to_ending_stack", result);
    }

    pub fn undo(&mut self) {
        let result = self.try_undo();
        log_rejected("undo", result);
    }

    // ----- Ходы с причиной отказа -----
    //
    // Во всех `try_*` проверки идут до первой мутации: ошибка = состояние не тронуто.

    /// Открыть 1 (Easy) или 3 (Hard) карты из прикупа.
    ///
    /// Если стек исчерпан, курсор сбрасывается в ноль, а колода перемешивается заново.
    /// Такой сброс не записывается в журнал и не считается ходом.
    pub fn try_draw_cards(&mut self) -> Result<(), MoveError> {
        if self.deck.is_empty() {
            return Err(MoveError::EmptyDeck);
        }

        if self.draw_pile_index >= self.deck.len() {
            self.draw_pile_index = 0;
            self.deck.shuffle(&mut self.rng);
            info!(target: "engine.draw", cards = self.deck.len(), "прикуп перемешан заново");
            return Ok(());
        }

        let previous_draw_index = self.draw_pile_index;
        self.draw_pile_index = (previous_draw_index + self.mode.draw_count()).min(self.deck.len());
        self.record(Move::Draw {
            previous_draw_index,
        });
        Ok(())
    }

    pub fn try_move_from_pile_to_column(&mut self, to_column: usize) -> Result<(), MoveError> {
        let to_column = check_column_index(to_column)?;
        let card = *self.playable_pile_card().ok_or(MoveError::NoDrawnCard)?;
        validate_column_placement(&card, self.columns[to_column].last())?;

        let card = self.take_playable_pile_card()?;
        self.columns[to_column].push(card);
        self.record(Move::PileToColumn { card, to_column });
        Ok(())
    }

    /// Перенести серию открытых карт, начиная со строки `from_row`, в конец другой колонки.
    ///
    /// Правило проверяется для нижней карты серии (той, что на `from_row`).
    pub fn try_move_between_columns(
        &mut self,
        from_column: usize,
        from_row: usize,
        to_column: usize,
    ) -> Result<(), MoveError> {
        let from_column = check_column_index(from_column)?;
        let to_column = check_column_index(to_column)?;
        if from_column == to_column {
            return Err(MoveError::SameColumn);
        }

        let card = *self.columns[from_column]
            .get(from_row)
            .ok_or(MoveError::RowOutOfRange {
                column: from_column,
                row: from_row,
            })?;
        if !card.face_up {
            return Err(MoveError::FaceDownCard);
        }
        validate_column_placement(&card, self.columns[to_column].last())?;

        let cards = self.columns[from_column].split_off(from_row);
        let last_card_was_face_up = self.reveal_top(from_column);
        self.columns[to_column].extend_from_slice(&cards);

        self.record(Move::ColumnToColumn {
            cards,
            from_column,
            to_column,
            last_card_was_face_up,
        });
        Ok(())
    }

    pub fn try_move_from_column_to_ending_stack(
        &mut self,
        from_column: usize,
    ) -> Result<(), MoveError> {
        let from_column = check_column_index(from_column)?;
        let card = *self.columns[from_column]
            .last()
            .ok_or(MoveError::EmptyColumn(from_column))?;
        if !card.face_up {
            return Err(MoveError::FaceDownCard);
        }

        let to_stack = card.suit.foundation_slot();
        validate_foundation_placement(&card, self.foundations[to_stack].last())?;

        self.columns[from_column].pop();
        let last_card_was_face_up = self.reveal_top(from_column);
        self.foundations[to_stack].push(card);

        self.record(Move::ColumnToEnding {
            card,
            from_column,
            to_stack,
            last_card_was_face_up,
        });
        Ok(())
    }

    /// Вернуть верхнюю карту дома в колонку. Пустая колонка никогда не принимает
    /// карту из дома, даже короля.
    pub fn try_move_from_ending_stack_to_column(
        &mut self,
        from_stack: usize,
        to_column: usize,
    ) -> Result<(), MoveError> {
        let from_stack = check_stack_index(from_stack)?;
        let to_column = check_column_index(to_column)?;

        let card = *self.foundations[from_stack]
            .last()
            .ok_or(MoveError::EmptyStack(from_stack))?;
        let top = self.columns[to_column]
            .last()
            .ok_or(MoveError::EmptyColumn(to_column))?;
        validate_onto_top(&card, top)?;

        self.foundations[from_stack].pop();
        self.columns[to_column].push(card);

        self.record(Move::EndingToColumn {
            card,
            from_stack,
            to_column,
        });
        Ok(())
    }

    pub fn try_move_from_pile_to_ending_stack(&mut self) -> Result<(), MoveError> {
        let card = *self.playable_pile_card().ok_or(MoveError::NoDrawnCard)?;
        let to_stack = card.suit.foundation_slot();
        validate_foundation_placement(&card, self.foundations[to_stack].last())?;

        let card = self.take_playable_pile_card()?;
        self.foundations[to_stack].push(card);
        self.record(Move::PileToEnding { card, to_stack });
        Ok(())
    }

    /// Точно отменить последний ход из журнала. Сама отмена не отменяется (redo нет).
    pub fn try_undo(&mut self) -> Result<(), MoveError> {
        let mv = self.undo_log.pop().ok_or(MoveError::NothingToUndo)?;
        let kind = mv.kind();

        match mv {
            Move::ColumnToColumn {
                cards,
                from_column,
                to_column,
                last_card_was_face_up,
            } => {
                let dest = &mut self.columns[to_column];
                let start = dest.len().saturating_sub(cards.len());
                let run = dest.split_off(start);
                if !last_card_was_face_up {
                    self.hide_top(from_column);
                }
                self.columns[from_column].extend(run);
            }

            Move::PileToColumn { to_column, .. } => {
                if let Some(card) = self.columns[to_column].pop() {
                    self.return_to_pile(card);
                }
            }

            Move::ColumnToEnding {
                from_column,
                to_stack,
                last_card_was_face_up,
                ..
            } => {
                if let Some(card) = self.foundations[to_stack].pop() {
                    if !last_card_was_face_up {
                        self.hide_top(from_column);
                    }
                    self.columns[from_column].push(card);
                }
            }

            Move::EndingToColumn {
                from_stack,
                to_column,
                ..
            } => {
                if let Some(card) = self.columns[to_column].pop() {
                    self.foundations[from_stack].push(card);
                }
            }

            Move::PileToEnding { to_stack, .. } => {
                if let Some(card) = self.foundations[to_stack].pop() {
                    self.return_to_pile(card);
                }
            }

            Move::Draw {
                previous_draw_index,
            } => {
                self.draw_pile_index = previous_draw_index.min(self.deck.len());
            }
        }

        self.move_count = self.move_count.saturating_sub(1);
        debug!(
            target: "engine.undo",
            ?kind,
            moves = self.move_count,
            left = self.undo_log.len(),
            "ход отменён"
        );
        Ok(())
    }

    // ----- Внутренние хелперы -----

    /// Успешный ход: в журнал, счётчик +1.
    fn record(&mut self, mv: Move) {
        self.move_count += 1;
        debug!(
            target: "engine.move",
            kind = ?mv.kind(),
            cards = mv.card_count(),
            moves = self.move_count,
            "{}",
            mv
        );
        self.undo_log.push(mv);

        if self.check_if_win() {
            info!(target: "engine.game", moves = self.move_count, "партия выиграна");
        }
    }

    /// Вынуть играбельную карту прикупа и сдвинуть курсор назад.
    fn take_playable_pile_card(&mut self) -> Result<Card, MoveError> {
        let index = self
            .draw_pile_index
            .checked_sub(1)
            .ok_or(MoveError::NoDrawnCard)?;
        let mut card = self.deck.remove(index).ok_or(MoveError::NoDrawnCard)?;
        card.face_up = true;
        self.draw_pile_index = index;
        Ok(card)
    }

    /// Вернуть карту в прикуп на позицию курсора и сдвинуть курсор вперёд.
    fn return_to_pile(&mut self, card: Card) {
        self.deck.insert(self.draw_pile_index, card);
        self.draw_pile_index += 1;
    }

    /// Открыть новую верхнюю карту колонки. Возвращает, была ли она открыта до этого
    /// (для пустой колонки: `true`, открывать нечего).
    fn reveal_top(&mut self, column: usize) -> bool {
        match self.columns[column].last_mut() {
            Some(top) => {
                let was_face_up = top.face_up;
                top.face_up = true;
                was_face_up
            }
            None => true,
        }
    }

    fn hide_top(&mut self, column: usize) {
        if let Some(top) = self.columns[column].last_mut() {
            top.face_up = false;
        }
    }
}

fn log_rejected(op: &'static str, result: Result<(), MoveError>) {
    if let Err(reason) = result {
        debug!(target: "engine.rejected", op, %reason, "ход отклонён");
    }
}
