//! Кодированные перечисления заголовка CLF.
//!
//! Каждое поле-код в бинарном заголовке — индекс в фиксированную таблицу
//! имён. Декодированное значение несёт и исходный код, и имя; код вне
//! таблицы отклоняется на этапе декодирования ([`ClfError::InvalidEnumCode`]),
//! так что некорректное состояние непредставимо.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::{ClfError, ClfResult};

/// Определяет перечисление с таблицей имён формата CLF.
///
/// Генерирует `from_code` (закрытая таблица), `code`, `name` и `Serialize`
/// в виде `{"code": n, "name": "..."}` — обе формы сохраняются при экспорте.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident = $code:literal => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant = $code,)+
        }

        impl $name {
            /// Размер таблицы имён.
            pub const COUNT: u32 = [$($code),+].len() as u32;

            /// Разрешает код из потока; коды вне таблицы отклоняются.
            pub fn from_code(code: u32) -> ClfResult<Self> {
                match code {
                    $($code => Ok($name::$variant),)+
                    _ => Err(ClfError::InvalidEnumCode {
                        field: $field,
                        code,
                        count: Self::COUNT,
                    }),
                }
            }

            /// Исходный код поля в файле.
            pub fn code(self) -> u32 {
                self as u32
            }

            /// Имя из таблицы формата.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut s = serializer.serialize_struct(stringify!($name), 2)?;
                s.serialize_field("code", &self.code())?;
                s.serialize_field("name", self.name())?;
                s.end()
            }
        }
    };
}

coded_enum!(
    /// Тип лицензии данных измерения
    LicenseType, "license_type" {
        None = 0 => "None",
        Manufacturer = 1 => "Manufacturer",
        ThirdParty = 2 => "ThirdParty",
        Research = 3 => "Research",
        ResAndDev = 4 => "ResandDev",
        ClfDev = 5 => "CLFDev",
    }
);

coded_enum!(
    /// Тип громкоговорителя
    LspType, "lsp_type" {
        Passive = 0 => "Passive",
        Active = 1 => "Active",
        Powered = 2 => "Powered",
    }
);

coded_enum!(
    /// Характер излучения
    RadiationType, "radiation" {
        HalfSphere = 0 => "HalfSphere",
        FullSphere = 1 => "FullSphere",
    }
);

coded_enum!(
    /// Тип симметрии баллона
    SymmetryType, "symmetry" {
        Full = 0 => "Full",
        Vertical = 1 => "Vertical",
        Horizontal = 2 => "Horizontal",
        None = 3 => "None",
        Rotational = 4 => "Rotational",
        Polar = 5 => "Polar",
    }
);

coded_enum!(
    /// Система отсчёта баллона
    BalloonReference, "balloon_reference" {
        Absolute = 0 => "Absolute",
        Relative = 1 => "Relative",
        Arbitrary = 2 => "Arbitrary",
    }
);

coded_enum!(
    /// Тип максимального входного сигнала
    TotalMaxInputType, "total_max_in_type" {
        Power = 0 => "Power",
        Voltage = 1 => "Voltage",
    }
);

coded_enum!(
    /// Метод измерения максимального входа
    TotalMaxInputMethod, "total_max_in_method" {
        Aes2_1984 = 0 => "AES2_1984",
        Iec268_1 = 1 => "IEC_268_1",
        Eia426B = 2 => "EIA_426_B",
        Custom = 3 => "CUSTOM",
    }
);

coded_enum!(
    /// Единица измерения DXF геометрии
    DxfUnit, "dxf_unit" {
        Mm = 0 => "MM",
        Cm = 1 => "CM",
        Dm = 2 => "DM",
        M = 3 => "M",
        In = 4 => "IN",
        Ft = 5 => "FT",
    }
);

coded_enum!(
    /// Направление оси DXF (общая таблица для dxf_axis и dxf_up)
    DxfDirection, "dxf_direction" {
        XNeg = 0 => "XNEG",
        XPos = 1 => "XPOS",
        YNeg = 2 => "YNEG",
        YPos = 3 => "YPOS",
        ZNeg = 4 => "ZNEG",
        ZPos = 5 => "ZPOS",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_resolves_name() {
        assert_eq!(LicenseType::from_code(4).unwrap(), LicenseType::ResAndDev);
        assert_eq!(LicenseType::ResAndDev.name(), "ResandDev");
        assert_eq!(LicenseType::ResAndDev.code(), 4);

        assert_eq!(
            TotalMaxInputMethod::from_code(0).unwrap().name(),
            "AES2_1984"
        );
        assert_eq!(DxfDirection::from_code(5).unwrap().name(), "ZPOS");
    }

    #[test]
    fn test_out_of_range_code_rejected() {
        let err = SymmetryType::from_code(6).unwrap_err();
        match err {
            ClfError::InvalidEnumCode { field, code, count } => {
                assert_eq!(field, "symmetry");
                assert_eq!(code, 6);
                assert_eq!(count, 6);
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(RadiationType::from_code(2).is_err());
        assert!(DxfUnit::from_code(100).is_err());
    }

    #[test]
    fn test_table_sizes_match_format() {
        assert_eq!(LicenseType::COUNT, 6);
        assert_eq!(LspType::COUNT, 3);
        assert_eq!(RadiationType::COUNT, 2);
        assert_eq!(SymmetryType::COUNT, 6);
        assert_eq!(BalloonReference::COUNT, 3);
        assert_eq!(TotalMaxInputType::COUNT, 2);
        assert_eq!(TotalMaxInputMethod::COUNT, 4);
        assert_eq!(DxfUnit::COUNT, 6);
        assert_eq!(DxfDirection::COUNT, 6);
    }

    #[test]
    fn test_serializes_code_and_name() {
        // Обе формы должны попадать в JSON-дерево
        let v = serde_json::to_value(LspType::Powered).unwrap();
        assert_eq!(v["code"], 2);
        assert_eq!(v["name"], "Powered");
    }
}
