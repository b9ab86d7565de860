use serde::{Deserialize, Serialize};

/// Рейтинг выигранных партий: количество ходов, меньше: лучше.
///
/// Это обычный владеемый контейнер: им владеет верхний уровень приложения
/// (CLI) и явно передаёт туда, где он нужен.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scoreboard {
    scores: Vec<u32>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Записать результат выигранной партии. Список остаётся отсортированным.
    pub fn record(&mut self, moves: u32) {
        let pos = self.scores.partition_point(|&s| s <= moves);
        self.scores.insert(pos, moves);
    }

    /// Все результаты по возрастанию.
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn best(&self) -> Option<u32> {
        self.scores.first().copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
