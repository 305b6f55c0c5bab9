//! Библиотека чтения формата CLF
//!
//! Эталонный декодер бинарных файлов CLF (Common Loudspeaker Format,
//! под-форматы .CF1 и .CF2) с данными направленности громкоговорителей.
//!
//! # Быстрый старт
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//! use clf_core::ClfFile;
//!
//! let file = File::open("speaker.CF2")?;
//! let mut reader = BufReader::new(file);
//! let decoded = ClfFile::decode(&mut reader)?;
//!
//! println!("{} bands", decoded.balloon.n_bands);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod binary;
pub mod export;
pub mod format;

pub use binary::*;
pub use export::*;
pub use format::*;

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
