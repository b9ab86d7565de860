use thiserror::Error;

/// Ошибки разбора текстовой команды dev-CLI.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Пустая команда")]
    Empty,

    #[error("Неизвестная команда: {0}")]
    UnknownVerb(String),

    #[error("Неверное число аргументов для команды {0}")]
    WrongArity(String),

    #[error("Индекс должен быть числом от 1: {0}")]
    BadIndex(String),
}
