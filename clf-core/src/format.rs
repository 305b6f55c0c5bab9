//! Структуры формата CLF и их декодирование.
//!
//! Бинарный .CF1/.CF2 файл — это фиксированная последовательность полей:
//! служебное слово тега, заголовок (~50 полей) и блок направленности
//! («баллон» затуханий по полосам, поворотам и дугам). Порядок полей —
//! контракт формата: каждое поле читается строго на своём месте, даже если
//! дальше не используется. Все многобайтовые числа little-endian.
//!
//! Декодирование линейно и однопроходно: тег → заголовок → выбор профиля
//! (без чтения байтов) → блок направленности → сборка [`ClfFile`]. Seek не
//! используется; после возврата курсор потока стоит сразу за последним
//! прочитанным полем.

use std::io::Read;

use clf_types::{
    BalloonReference, ClfResult, DxfDirection, DxfUnit, FormatTag, LicenseType, LspType,
    RadiationType, SymmetryType, TotalMaxInputMethod, TotalMaxInputType,
};
use serde::Serialize;

use crate::binary::read::{read_chars, read_f32, read_f32_array, read_point3, read_u32};

/// Служебная информация файла (первые 52 байта).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileInfo {
    /// Под-формат, разрешённый из тега
    pub id: FormatTag,
    pub version: u32,
    pub draft: u32,
    pub bin_version: u32,
    pub reader: u32,
    pub reader_version: String,
    /// Читается позиционно, не проверяется
    pub checksum: u32,
    pub magic: u32,
    /// Зарезервировано (4 слова)
    pub header_extra: [u32; 4],
}

impl FileInfo {
    pub fn decode<R: Read>(r: &mut R) -> ClfResult<Self> {
        // Тег разрешается первым: неизвестный формат отклоняется до того,
        // как будет потреблён хоть один последующий байт
        let id = FormatTag::from_tag(read_u32(r, "tag")?)?;

        let version = read_u32(r, "version")?;
        let draft = read_u32(r, "draft")?;
        let bin_version = read_u32(r, "bin_version")?;
        let reader = read_u32(r, "reader")?;
        let reader_version = read_chars(r, 8, "reader_version")?;
        let checksum = read_u32(r, "checksum")?;
        let magic = read_u32(r, "magic")?;

        let mut header_extra = [0u32; 4];
        for slot in header_extra.iter_mut() {
            *slot = read_u32(r, "header_extra")?;
        }

        Ok(FileInfo {
            id,
            version,
            draft,
            bin_version,
            reader,
            reader_version,
            checksum,
            magic,
            header_extra,
        })
    }
}

/// Флаги наличия необязательных полей заголовка.
///
/// Позиции битов не подряд (0–4, 7, 8, 10–12) — так в спецификации
/// формата, сохраняется в точности.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GivenFlags {
    pub raw: u32,
    pub has_colors: bool,
    pub has_mounting: bool,
    pub has_measurement_note: bool,
    pub has_measurement_environment: bool,
    pub has_measurement_distance: bool,
    pub has_sensitivity_info: bool,
    pub has_impedance_info: bool,
    pub has_axial_spectrum: bool,
    pub has_axial_spectrum_info: bool,
    pub has_cabinet_system: bool,
}

impl GivenFlags {
    pub fn from_raw(raw: u32) -> Self {
        GivenFlags {
            raw,
            has_colors: raw & (1 << 0) != 0,
            has_mounting: raw & (1 << 1) != 0,
            has_measurement_note: raw & (1 << 2) != 0,
            has_measurement_environment: raw & (1 << 3) != 0,
            has_measurement_distance: raw & (1 << 4) != 0,
            has_sensitivity_info: raw & (1 << 7) != 0,
            has_impedance_info: raw & (1 << 8) != 0,
            has_axial_spectrum: raw & (1 << 10) != 0,
            has_axial_spectrum_info: raw & (1 << 11) != 0,
            has_cabinet_system: raw & (1 << 12) != 0,
        }
    }
}

/// Флаги описания корпуса (биты 0–4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CabFlags {
    pub raw: u32,
    pub has_rect: bool,
    pub has_trap: bool,
    pub has_edges: bool,
    pub has_face_edges: bool,
    pub has_dxf: bool,
}

impl CabFlags {
    pub fn from_raw(raw: u32) -> Self {
        CabFlags {
            raw,
            has_rect: raw & (1 << 0) != 0,
            has_trap: raw & (1 << 1) != 0,
            has_edges: raw & (1 << 2) != 0,
            has_face_edges: raw & (1 << 3) != 0,
            has_dxf: raw & (1 << 4) != 0,
        }
    }
}

/// Трапецеидальный корпус: 10 f32 в порядке файла.
///
/// Имена полей — как в таблице формата CLF (включая `xmaxr`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CabTrap {
    pub xmin: f32,
    pub xmax: f32,
    pub yminr: f32,
    pub xmaxr: f32,
    pub yminf: f32,
    pub ymaxf: f32,
    pub zminr: f32,
    pub zmaxr: f32,
    pub zminf: f32,
    pub zmaxf: f32,
}

impl CabTrap {
    pub fn decode<R: Read>(r: &mut R) -> ClfResult<Self> {
        Ok(CabTrap {
            xmin: read_f32(r, "cab_trap")?,
            xmax: read_f32(r, "cab_trap")?,
            yminr: read_f32(r, "cab_trap")?,
            xmaxr: read_f32(r, "cab_trap")?,
            yminf: read_f32(r, "cab_trap")?,
            ymaxf: read_f32(r, "cab_trap")?,
            zminr: read_f32(r, "cab_trap")?,
            zmaxr: read_f32(r, "cab_trap")?,
            zminf: read_f32(r, "cab_trap")?,
            zmaxf: read_f32(r, "cab_trap")?,
        })
    }
}

/// Заголовок CLF файла.
///
/// Строки — буферы фиксированной ширины с нулевым дополнением (256 байт,
/// кроме трёх дат по 16, reader_version 8 и reserved_1 48).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClfHeader {
    pub file_info: FileInfo,
    pub license: String,
    pub license_type: LicenseType,
    pub model_name: String,
    pub manufacturer: String,
    pub description: String,
    pub given_flags: GivenFlags,
    pub colors: String,
    pub mounting: String,
    /// Масса, кг
    pub weight: f32,
    pub website: String,
    pub measure_contact: String,
    pub measure_email: String,
    pub measure_date: String,
    pub text_file_date: String,
    pub bin_file_date: String,
    pub measure_note: String,
    pub measure_environment: String,
    /// Дистанция измерения, м
    pub measure_distance: f32,
    pub lsp_type: LspType,
    pub type_info: String,
    pub sensitivity_info: String,
    pub impedance_info: String,
    pub total_max_in_type: TotalMaxInputType,
    pub total_max_in: f32,
    pub total_max_in_method: TotalMaxInputMethod,
    pub total_max_in_info: String,
    /// Пользовательский входной спектр (30 полос)
    pub total_max_in_custom_spectrum: Vec<f32>,
    /// Средний импеданс, Ом
    pub avg_impedance: f32,
    /// Осевой спектр (30 полос)
    pub total_axial_spectrum: Vec<f32>,
    pub total_axial_spectrum_info: String,
    pub radiation: RadiationType,
    pub symmetry: SymmetryType,
    pub balloon_reference: BalloonReference,
    pub cab_flags: CabFlags,
    pub cab_rect_min: [f32; 3],
    pub cab_rect_max: [f32; 3],
    pub cab_trap: CabTrap,
    pub dxf_unit: DxfUnit,
    pub dxf_origin: [f32; 3],
    pub dxf_axis: DxfDirection,
    pub dxf_up: DxfDirection,
    /// Зарезервировано; читается только ради выравнивания потока
    pub reserved_1: String,
}

impl ClfHeader {
    /// Декодирует заголовок в порядке объявления полей формата.
    pub fn decode<R: Read>(r: &mut R) -> ClfResult<Self> {
        let file_info = FileInfo::decode(r)?;

        let license = read_chars(r, 256, "license")?;
        let license_type = LicenseType::from_code(read_u32(r, "license_type")?)?;
        let model_name = read_chars(r, 256, "model_name")?;
        let manufacturer = read_chars(r, 256, "manufacturer")?;
        let description = read_chars(r, 256, "description")?;
        let given_flags = GivenFlags::from_raw(read_u32(r, "given_flags")?);
        let colors = read_chars(r, 256, "colors")?;
        let mounting = read_chars(r, 256, "mounting")?;
        let weight = read_f32(r, "weight")?;
        let website = read_chars(r, 256, "website")?;
        let measure_contact = read_chars(r, 256, "measure_contact")?;
        let measure_email = read_chars(r, 256, "measure_email")?;
        let measure_date = read_chars(r, 16, "measure_date")?;
        let text_file_date = read_chars(r, 16, "text_file_date")?;
        let bin_file_date = read_chars(r, 16, "bin_file_date")?;
        let measure_note = read_chars(r, 256, "measure_note")?;
        let measure_environment = read_chars(r, 256, "measure_environment")?;
        let measure_distance = read_f32(r, "measure_distance")?;
        let lsp_type = LspType::from_code(read_u32(r, "lsp_type")?)?;
        let type_info = read_chars(r, 256, "type_info")?;
        let sensitivity_info = read_chars(r, 256, "sensitivity_info")?;
        let impedance_info = read_chars(r, 256, "impedance_info")?;
        let total_max_in_type =
            TotalMaxInputType::from_code(read_u32(r, "total_max_in_type")?)?;
        let total_max_in = read_f32(r, "total_max_in")?;
        let total_max_in_method =
            TotalMaxInputMethod::from_code(read_u32(r, "total_max_in_method")?)?;
        let total_max_in_info = read_chars(r, 256, "total_max_in_info")?;
        let total_max_in_custom_spectrum =
            read_f32_array(r, 30, "total_max_in_custom_spectrum")?;
        let avg_impedance = read_f32(r, "avg_impedance")?;
        let total_axial_spectrum = read_f32_array(r, 30, "total_axial_spectrum")?;
        let total_axial_spectrum_info = read_chars(r, 256, "total_axial_spectrum_info")?;
        let radiation = RadiationType::from_code(read_u32(r, "radiation")?)?;
        let symmetry = SymmetryType::from_code(read_u32(r, "symmetry")?)?;
        let balloon_reference = BalloonReference::from_code(read_u32(r, "balloon_reference")?)?;
        let cab_flags = CabFlags::from_raw(read_u32(r, "cab_flags")?);
        let cab_rect_min = read_point3(r, "cab_rect_min")?;
        let cab_rect_max = read_point3(r, "cab_rect_max")?;
        let cab_trap = CabTrap::decode(r)?;
        let dxf_unit = DxfUnit::from_code(read_u32(r, "dxf_unit")?)?;
        let dxf_origin = read_point3(r, "dxf_origin")?;
        let dxf_axis = DxfDirection::from_code(read_u32(r, "dxf_axis")?)?;
        let dxf_up = DxfDirection::from_code(read_u32(r, "dxf_up")?)?;
        let reserved_1 = read_chars(r, 48, "reserved_1")?;

        Ok(ClfHeader {
            file_info,
            license,
            license_type,
            model_name,
            manufacturer,
            description,
            given_flags,
            colors,
            mounting,
            weight,
            website,
            measure_contact,
            measure_email,
            measure_date,
            text_file_date,
            bin_file_date,
            measure_note,
            measure_environment,
            measure_distance,
            lsp_type,
            type_info,
            sensitivity_info,
            impedance_info,
            total_max_in_type,
            total_max_in,
            total_max_in_method,
            total_max_in_info,
            total_max_in_custom_spectrum,
            avg_impedance,
            total_axial_spectrum,
            total_axial_spectrum_info,
            radiation,
            symmetry,
            balloon_reference,
            cab_flags,
            cab_rect_min,
            cab_rect_max,
            cab_trap,
            dxf_unit,
            dxf_origin,
            dxf_axis,
            dxf_up,
            reserved_1,
        })
    }
}

/// Блок направленности («баллон»).
///
/// Размерности и длины массивов берутся из профиля формата, а не из
/// потока. Производные поля (частоты, углы) вычисляются при сборке.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalloonData {
    /// Точный размер блока в байтах (производная профиля)
    pub size: usize,
    pub n_bands: usize,
    pub n_rot: usize,
    pub n_arc: usize,
    /// Угловое разрешение, градусы
    pub accuracy_angle: i32,
    pub frequencies: Vec<f32>,
    /// `rotation_angle[i] = i * accuracy_angle`
    pub rotation_angle: Vec<i32>,
    /// `arc_angle[i] = 90 - i * accuracy_angle`
    pub arc_angle: Vec<i32>,
    pub min_band: u32,
    pub max_band: u32,
    pub measure_voltage: Vec<f32>,
    pub sensitivity: Vec<f32>,
    pub impedance: Vec<f32>,
    #[serde(rename = "6db_hor_left")]
    pub hor_left_6db: Vec<f32>,
    #[serde(rename = "6db_hor_right")]
    pub hor_right_6db: Vec<f32>,
    #[serde(rename = "6db_ver_upper")]
    pub ver_upper_6db: Vec<f32>,
    #[serde(rename = "6db_ver_lower")]
    pub ver_lower_6db: Vec<f32>,
    pub axial_q: Vec<f32>,
    /// Осевой отклик по поворотам: `[n_bands][n_rot]`
    pub on_axis: Vec<Vec<f32>>,
    /// Затухание по (полоса, поворот, дуга): `[n_bands][n_rot][n_arc]`
    pub balloon: Vec<Vec<Vec<f32>>>,
    /// Зарезервированный хвост блока; читается ради выравнивания
    pub reserved: Vec<f32>,
}

impl BalloonData {
    /// Декодирует блок направленности для формата `tag`.
    pub fn decode<R: Read>(r: &mut R, tag: FormatTag) -> ClfResult<Self> {
        let p = tag.profile();

        let min_band = read_u32(r, "min_band")?;
        let max_band = read_u32(r, "max_band")?;

        let measure_voltage = read_f32_array(r, p.n_bands, "measure_voltage")?;
        let sensitivity = read_f32_array(r, p.n_bands, "sensitivity")?;
        let impedance = read_f32_array(r, p.n_bands, "impedance")?;
        let hor_left_6db = read_f32_array(r, p.n_bands, "6db_hor_left")?;
        let hor_right_6db = read_f32_array(r, p.n_bands, "6db_hor_right")?;
        let ver_upper_6db = read_f32_array(r, p.n_bands, "6db_ver_upper")?;
        let ver_lower_6db = read_f32_array(r, p.n_bands, "6db_ver_lower")?;
        let axial_q = read_f32_array(r, p.n_bands, "axial_q")?;

        let mut on_axis = Vec::with_capacity(p.n_bands);
        for _ in 0..p.n_bands {
            on_axis.push(read_f32_array(r, p.n_rot, "on_axis")?);
        }

        let mut balloon = Vec::with_capacity(p.n_bands);
        for _ in 0..p.n_bands {
            let mut per_rot = Vec::with_capacity(p.n_rot);
            for _ in 0..p.n_rot {
                per_rot.push(read_f32_array(r, p.n_arc, "balloon")?);
            }
            balloon.push(per_rot);
        }

        let reserved = read_f32_array(r, p.n_bands, "reserved")?;

        Ok(BalloonData {
            size: p.size,
            n_bands: p.n_bands,
            n_rot: p.n_rot,
            n_arc: p.n_arc,
            accuracy_angle: p.accuracy_angle,
            frequencies: p.frequencies.to_vec(),
            rotation_angle: p.rotation_angles(),
            arc_angle: p.arc_angles(),
            min_band,
            max_band,
            measure_voltage,
            sensitivity,
            impedance,
            hor_left_6db,
            hor_right_6db,
            ver_upper_6db,
            ver_lower_6db,
            axial_q,
            on_axis,
            balloon,
            reserved,
        })
    }
}

/// Полностью декодированный CLF файл.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClfFile {
    pub header: ClfHeader,
    pub balloon: BalloonData,
}

impl ClfFile {
    /// Декодирует файл из потока за один проход.
    ///
    /// Поток читается строго последовательно, без seek и возвратов;
    /// после успешного возврата курсор стоит сразу за последним полем.
    /// При любой ошибке частичная запись не возвращается. Декодирование
    /// детерминировано: одни и те же байты дают одно и то же значение.
    pub fn decode<R: Read>(r: &mut R) -> ClfResult<Self> {
        let header = ClfHeader::decode(r)?;
        let balloon = BalloonData::decode(r, header.file_info.id)?;

        Ok(ClfFile { header, balloon })
    }
}
