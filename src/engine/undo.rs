use circular_buffer::CircularBuffer;

use crate::engine::moves::Move;

/// Глубина истории отмены.
pub const UNDO_CAPACITY: usize = 3;

/// Журнал отмены фиксированной ёмкости.
///
/// `push` при заполненном журнале вытесняет самый старый ход (FIFO),
/// `pop` отдаёт самый свежий (LIFO). Вытесненные ходы отменить уже нельзя.
#[derive(Clone, Debug)]
pub struct UndoLog {
    moves: CircularBuffer<UNDO_CAPACITY, Move>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self {
            moves: CircularBuffer::new(),
        }
    }

    /// Записать ход; при полном журнале самый старый ход теряется.
    pub fn push(&mut self, mv: Move) {
        self.moves.push_back(mv);
    }

    /// Снять самый свежий ход.
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop_back()
    }

    /// Самый свежий ход без снятия.
    pub fn peek(&self) -> Option<&Move> {
        self.moves.back()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        UNDO_CAPACITY
    }

    /// Ходы от старого к новому.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}

impl Default for UndoLog {
    fn default() -> Self {
        Self::new()
    }
}
