use crate::domain::card::Card;
use crate::domain::{COLUMN_COUNT, FOUNDATION_COUNT};
use crate::engine::errors::MoveError;

/// Можно ли положить `card` поверх колонки с верхней картой `top`.
///
/// Пустая колонка принимает только короля; иначе карта должна быть
/// другого цвета и ровно на единицу младше верхней.
pub fn validate_column_placement(card: &Card, top: Option<&Card>) -> Result<(), MoveError> {
    match top {
        None if card.is_king() => Ok(()),
        None => Err(MoveError::KingRequired),
        Some(top) => validate_onto_top(card, top),
    }
}

/// Правило "другой цвет и на единицу младше" против существующей верхней карты.
pub fn validate_onto_top(card: &Card, top: &Card) -> Result<(), MoveError> {
    if card.is_opposite_color(top) && card.rank.is_one_below(top.rank) {
        Ok(())
    } else {
        Err(MoveError::NotDescendingAlternating)
    }
}

/// Можно ли положить `card` в дом с верхней картой `top`.
///
/// Масть не проверяется явно: дом выбирается по фиксированному слоту масти.
pub fn validate_foundation_placement(card: &Card, top: Option<&Card>) -> Result<(), MoveError> {
    let accepted = match top {
        None => card.is_ace(),
        Some(top) => top.rank.is_one_below(card.rank),
    };
    if accepted {
        Ok(())
    } else {
        Err(MoveError::FoundationRejected)
    }
}

pub fn check_column_index(index: usize) -> Result<usize, MoveError> {
    if index < COLUMN_COUNT {
        Ok(index)
    } else {
        Err(MoveError::ColumnOutOfRange(index))
    }
}

pub fn check_stack_index(index: usize) -> Result<usize, MoveError> {
    if index < FOUNDATION_COUNT {
        Ok(index)
    } else {
        Err(MoveError::StackOutOfRange(index))
    }
}
