use thiserror::Error;

/// Результат для операций CLF
pub type ClfResult<T> = std::result::Result<T, ClfError>;

/// Типы ошибок декодирования CLF.
///
/// Все ошибки фатальны для вызова decode: частичный результат не
/// возвращается, повторных попыток нет.
#[derive(Debug, Error)]
pub enum ClfError {
    /// Неизвестный тег формата (первые 4 байта файла)
    #[error("Unrecognized CLF format tag: {0}")]
    UnrecognizedFormat(u32),

    /// Поток закончился раньше, чем поле было дочитано
    #[error("Unexpected end of stream while reading '{field}'")]
    UnexpectedEndOfStream { field: &'static str },

    /// Код перечисления вне диапазона его таблицы имён
    #[error("Invalid {field} code: {code} (known codes: 0..{count})")]
    InvalidEnumCode {
        field: &'static str,
        code: u32,
        count: u32,
    },

    /// Ошибки ввода/вывода (автоконвертируются из std::io::Error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
