use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::errors::CommandParseError;
use crate::engine::{Game, MoveError, RandomSource};

/// Команда от внешнего слоя (меню, CLI). Индексы: с нуля.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Открыть карты из прикупа.
    Draw,

    /// Карта прикупа -> колонка.
    PileToColumn { to_column: usize },

    /// Серия карт из колонки в колонку, начиная со строки `from_row`.
    BetweenColumns {
        from_column: usize,
        from_row: usize,
        to_column: usize,
    },

    /// Верхняя карта колонки -> дом.
    ColumnToEnding { from_column: usize },

    /// Верхняя карта дома -> колонка.
    EndingToColumn { from_stack: usize, to_column: usize },

    /// Карта прикупа -> дом.
    PileToEnding,

    /// Отменить последний ход.
    Undo,
}

/// Применить команду "молча": отклонённый ход ничего не меняет и ничего не сообщает.
pub fn apply_command<R: RandomSource>(game: &mut Game<R>, command: &Command) {
    match *command {
        Command::Draw => game.draw_cards(),
        Command::PileToColumn { to_column } => game.move_from_pile_to_column(to_column),
        Command::BetweenColumns {
            from_column,
            from_row,
            to_column,
        } => game.move_between_columns(from_column, from_row, to_column),
        Command::ColumnToEnding { from_column } => {
            game.move_from_column_to_ending_stack(from_column)
        }
        Command::EndingToColumn {
            from_stack,
            to_column,
        } => game.move_from_ending_stack_to_column(from_stack, to_column),
        Command::PileToEnding => game.move_from_pile_to_ending_stack(),
        Command::Undo => game.undo(),
    }
}

/// Применить команду и вернуть причину отказа, если ход не прошёл.
pub fn try_apply_command<R: RandomSource>(
    game: &mut Game<R>,
    command: &Command,
) -> Result<(), MoveError> {
    match *command {
        Command::Draw => game.try_draw_cards(),
        Command::PileToColumn { to_column } => game.try_move_from_pile_to_column(to_column),
        Command::BetweenColumns {
            from_column,
            from_row,
            to_column,
        } => game.try_move_between_columns(from_column, from_row, to_column),
        Command::ColumnToEnding { from_column } => {
            game.try_move_from_column_to_ending_stack(from_column)
        }
        Command::EndingToColumn {
            from_stack,
            to_column,
        } => game.try_move_from_ending_stack_to_column(from_stack, to_column),
        Command::PileToEnding => game.try_move_from_pile_to_ending_stack(),
        Command::Undo => game.try_undo(),
    }
}

/// Короткий текстовый синтаксис dev-CLI, индексы с единицы (как видит человек):
///
/// | ввод            | команда          |
/// |-----------------|------------------|
/// | `d`             | Draw             |
/// | `pc 3`          | PileToColumn     |
/// | `cc 1 2 5`      | BetweenColumns   |
/// | `ce 4`          | ColumnToEnding   |
/// | `ec 2 6`        | EndingToColumn   |
/// | `pe`            | PileToEnding     |
/// | `u`             | Undo             |
impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let verb = parts.next().ok_or(CommandParseError::Empty)?;
        let args = parts
            .map(parse_one_based)
            .collect::<Result<Vec<usize>, _>>()?;

        let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("d", []) => Command::Draw,
            ("pc", [to]) => Command::PileToColumn { to_column: *to },
            ("cc", [from, row, to]) => Command::BetweenColumns {
                from_column: *from,
                from_row: *row,
                to_column: *to,
            },
            ("ce", [from]) => Command::ColumnToEnding { from_column: *from },
            ("ec", [stack, to]) => Command::EndingToColumn {
                from_stack: *stack,
                to_column: *to,
            },
            ("pe", []) => Command::PileToEnding,
            ("u", []) => Command::Undo,
            ("d" | "pc" | "cc" | "ce" | "ec" | "pe" | "u", _) => {
                return Err(CommandParseError::WrongArity(verb.to_string()))
            }
            _ => return Err(CommandParseError::UnknownVerb(verb.to_string())),
        };
        Ok(command)
    }
}

fn parse_one_based(token: &str) -> Result<usize, CommandParseError> {
    token
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| CommandParseError::BadIndex(token.to_string()))
}
