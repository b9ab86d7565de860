use thiserror::Error;

/// Причина, по которой ход отклонён.
///
/// Публичные операции `Game` молча игнорируют отклонённые ходы, а `try_*`-варианты
/// возвращают эту ошибку. В обоих случаях состояние игры не меняется.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("Колонка {0} не существует")]
    ColumnOutOfRange(usize),

    #[error("Дом {0} не существует")]
    StackOutOfRange(usize),

    #[error("Колонка-источник совпадает с колонкой-назначением")]
    SameColumn,

    #[error("В колонке {column} нет строки {row}")]
    RowOutOfRange { column: usize, row: usize },

    #[error("Карта лежит рубашкой вверх и не может быть перенесена")]
    FaceDownCard,

    #[error("Колонка {0} пуста")]
    EmptyColumn(usize),

    #[error("Дом {0} пуст")]
    EmptyStack(usize),

    #[error("В прикупе нет открытой карты")]
    NoDrawnCard,

    #[error("Колода пуста")]
    EmptyDeck,

    #[error("На пустую колонку можно положить только короля")]
    KingRequired,

    #[error("Карта должна быть другого цвета и на единицу младше")]
    NotDescendingAlternating,

    #[error("Дом не принимает эту карту")]
    FoundationRejected,

    #[error("Нет ходов для отмены")]
    NothingToUndo,
}
