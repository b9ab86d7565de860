//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для движка;
//! - конфигурация партии (аргументы CLI / JSON-файл).

pub mod config;
pub mod rng;

pub use config::{ConfigError, GameConfig};
pub use rng::*;
