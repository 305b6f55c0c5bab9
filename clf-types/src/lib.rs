//! Общие типы формата CLF: теги под-форматов, таблицы кодов, ошибки.

pub mod enums;
pub mod error;
pub mod layout;

pub use enums::*;
pub use error::*;
pub use layout::*;
