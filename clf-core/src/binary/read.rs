//! Примитивные читатели полей фиксированной ширины.
//!
//! Каждый читатель продвигает курсор потока ровно на ширину поля и
//! возвращает [`ClfError::UnexpectedEndOfStream`] с именем поля, если
//! байтов не хватает. Все многобайтовые значения — little-endian (принятое
//! соглашение семейства CLF), одинаково для целых и для f32.

use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};
use clf_types::{ClfError, ClfResult};

fn map_read_err(e: std::io::Error, field: &'static str) -> ClfError {
    if e.kind() == std::io::ErrorKind::UnexpectedEof {
        ClfError::UnexpectedEndOfStream { field }
    } else {
        ClfError::Io(e)
    }
}

/// u32, 4 байта little-endian.
pub fn read_u32<R: Read>(r: &mut R, field: &'static str) -> ClfResult<u32> {
    r.read_u32::<LittleEndian>()
        .map_err(|e| map_read_err(e, field))
}

/// f32 (IEEE-754 single), 4 байта little-endian.
pub fn read_f32<R: Read>(r: &mut R, field: &'static str) -> ClfResult<f32> {
    r.read_f32::<LittleEndian>()
        .map_err(|e| map_read_err(e, field))
}

/// Буфер фиксированной длины `len` → строка.
///
/// Из буфера удаляются ВСЕ нулевые байты, не только хвостовое дополнение:
/// нуль внутри логического содержимого тоже исчезает. Так ведёт себя
/// эталонный ридер CLF, поведение зафиксировано тестами.
pub fn read_chars<R: Read>(r: &mut R, len: usize, field: &'static str) -> ClfResult<String> {
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf).map_err(|e| map_read_err(e, field))?;
    buf.retain(|&b| b != 0);
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Массив f32 фиксированной длины.
pub fn read_f32_array<R: Read>(r: &mut R, len: usize, field: &'static str) -> ClfResult<Vec<f32>> {
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        out.push(read_f32(r, field)?);
    }
    Ok(out)
}

/// Точка в пространстве: три f32 подряд.
pub fn read_point3<R: Read>(r: &mut R, field: &'static str) -> ClfResult<[f32; 3]> {
    Ok([
        read_f32(r, field)?,
        read_f32(r, field)?,
        read_f32(r, field)?,
    ])
}
