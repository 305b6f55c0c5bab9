//! Экспорт декодированного файла: JSON-дерево и CSV-таблица направленности.
//!
//! Ядро отдаёт данные двумя контрактами: дерево именованных полей
//! (через `Serialize`, структура повторяет декодированную запись) и ленивую
//! последовательность строк (частота, поворот, дуга, затухание) в порядке
//! частота → поворот → дуга. Запись в файлы — дело вызывающей стороны.

use std::io::Write;

use clf_types::{ClfError, ClfResult};

use crate::format::{BalloonData, ClfFile};

/// Одна строка табличного экспорта направленности.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectivityRow {
    /// Центральная частота полосы, Гц
    pub frequency: f32,
    /// Угол поворота, градусы
    pub rotation: i32,
    /// Угол дуги, градусы
    pub arc: i32,
    /// Затухание, дБ
    pub attenuation: f32,
}

impl BalloonData {
    /// Ленивая развёртка баллона в 4-кортежи.
    ///
    /// Порядок вложенности: частота → поворот → дуга; ничего не
    /// аллоцируется до потребления.
    pub fn directivity_rows(&self) -> impl Iterator<Item = DirectivityRow> + '_ {
        self.balloon.iter().enumerate().flat_map(move |(b, per_rot)| {
            let frequency = self.frequencies[b];
            per_rot.iter().enumerate().flat_map(move |(r, per_arc)| {
                let rotation = self.rotation_angle[r];
                per_arc.iter().enumerate().map(move |(a, att)| DirectivityRow {
                    frequency,
                    rotation,
                    arc: self.arc_angle[a],
                    attenuation: *att,
                })
            })
        })
    }
}

/// Пишет JSON-дерево декодированного файла (pretty, 2 пробела).
pub fn write_json<W: Write>(file: &ClfFile, out: W) -> ClfResult<()> {
    serde_json::to_writer_pretty(out, file).map_err(|e| ClfError::Io(e.into()))
}

/// Пишет CSV направленности: заголовок и по строке на каждую ячейку баллона.
pub fn write_csv<W: Write>(balloon: &BalloonData, mut out: W) -> ClfResult<()> {
    writeln!(out, "frequency, rotation, arc, attenuation")?;

    for row in balloon.directivity_rows() {
        writeln!(
            out,
            "{},{},{},{:.2}",
            row.frequency, row.rotation, row.arc, row.attenuation
        )?;
    }

    out.flush()?;
    Ok(())
}
