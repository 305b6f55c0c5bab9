//! Теги под-форматов CLF и профили размерностей.
//!
//! Размерности блока направленности (количество полос, отсчётов поворота и
//! дуги) никогда не читаются из файла: это чистая функция тега формата.
//! Все таблицы — неизменяемые константы процесса.

use serde::Serialize;

use crate::error::{ClfError, ClfResult};

/// Тег под-формата CF1 (первые 4 байта файла)
pub const CF1_TAG: u32 = 703_808;
/// Тег под-формата CF2
pub const CF2_TAG: u32 = 703_809;

/// Октавный ряд частот CF1 (10 полос)
pub const OCTAVE: [f32; 10] = [
    31.5, 63.0, 125.0, 250.0, 500.0, 1000.0, 2000.0, 4000.0, 8000.0, 16000.0,
];

/// Третьоктавный ряд частот CF2 (30 полос)
pub const THIRD_OCTAVE: [f32; 30] = [
    25.0, 31.5, 40.0, 50.0, 63.0, 80.0, 100.0, 125.0, 160.0, 200.0, 250.0, 320.0, 400.0, 500.0,
    640.0, 800.0, 1000.0, 1250.0, 1600.0, 2000.0, 2500.0, 3200.0, 4000.0, 5000.0, 6400.0, 8000.0,
    10000.0, 12500.0, 16000.0, 20000.0,
];

/// Известные под-форматы CLF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    /// Компактный вариант: октавные полосы, шаг 10°
    Cf1,
    /// Расширенный вариант: третьоктавные полосы, шаг 5°
    Cf2,
}

impl FormatTag {
    /// Разрешает тег из первого слова файла.
    ///
    /// Таблица закрытая: неизвестные значения отклоняются до чтения
    /// каких-либо последующих полей.
    pub fn from_tag(tag: u32) -> ClfResult<Self> {
        match tag {
            CF1_TAG => Ok(FormatTag::Cf1),
            CF2_TAG => Ok(FormatTag::Cf2),
            other => Err(ClfError::UnrecognizedFormat(other)),
        }
    }

    /// Значение тега в файле.
    pub fn tag(self) -> u32 {
        match self {
            FormatTag::Cf1 => CF1_TAG,
            FormatTag::Cf2 => CF2_TAG,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FormatTag::Cf1 => "cf1",
            FormatTag::Cf2 => "cf2",
        }
    }

    /// Профиль размерностей — чистая функция тега.
    pub fn profile(self) -> &'static LayoutProfile {
        match self {
            FormatTag::Cf1 => &CF1_PROFILE,
            FormatTag::Cf2 => &CF2_PROFILE,
        }
    }
}

/// Размерности блока направленности, фиксированные для под-формата.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutProfile {
    /// Точный размер блока направленности в байтах
    pub size: usize,
    /// Количество частотных полос
    pub n_bands: usize,
    /// Количество отсчётов поворота (меридианы баллона)
    pub n_rot: usize,
    /// Количество отсчётов дуги (от верхнего полюса)
    pub n_arc: usize,
    /// Угловое разрешение, градусы
    pub accuracy_angle: i32,
    /// Ряд частот полос
    pub frequencies: &'static [f32],
}

/// Профиль CF1: 10 полос × 36 поворотов × 19 дуг
pub const CF1_PROFILE: LayoutProfile = LayoutProfile {
    size: 29_168,
    n_bands: 10,
    n_rot: 36,
    n_arc: 19,
    accuracy_angle: 10,
    frequencies: &OCTAVE,
};

/// Профиль CF2: 30 полос × 72 поворота × 37 дуг
pub const CF2_PROFILE: LayoutProfile = LayoutProfile {
    size: 329_408,
    n_bands: 30,
    n_rot: 72,
    n_arc: 37,
    accuracy_angle: 5,
    frequencies: &THIRD_OCTAVE,
};

impl LayoutProfile {
    /// Углы поворота в градусах: `i * accuracy_angle`.
    pub fn rotation_angles(&self) -> Vec<i32> {
        (0..self.n_rot as i32)
            .map(|i| i * self.accuracy_angle)
            .collect()
    }

    /// Углы дуги в градусах: `90 - i * accuracy_angle`.
    pub fn arc_angles(&self) -> Vec<i32> {
        (0..self.n_arc as i32)
            .map(|i| 90 - i * self.accuracy_angle)
            .collect()
    }
}
