//! Внешний API движка пасьянса.
//!
//! Здесь описываются:
//! - команды (commands.rs): всё, что меняет состояние партии;
//! - запросы (queries.rs): только чтение и отрисовка;
//! - DTO (dto.rs): удобные структуры для фронта;
//! - ошибки (errors.rs): разбор пользовательского ввода.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
