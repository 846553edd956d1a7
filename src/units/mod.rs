//! 비례식 슬롯에 붙는 단위 태그와 질량 상수 모음.

pub mod mass;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 슬롯에 붙일 수 있는 단위 태그. 목록은 고정되어 있다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitTag {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "oz")]
    Ounce,
    #[serde(rename = "lbs")]
    Pound,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "floz")]
    FluidOunce,
    #[serde(rename = "kcal")]
    KiloCalorie,
}

impl UnitTag {
    /// 선택 목록에 표시되는 순서 그대로의 전체 태그.
    pub const ALL: [UnitTag; 6] = [
        UnitTag::Gram,
        UnitTag::Ounce,
        UnitTag::Pound,
        UnitTag::Milliliter,
        UnitTag::FluidOunce,
        UnitTag::KiloCalorie,
    ];

    /// 화면과 설정 파일에서 쓰는 짧은 표기.
    pub fn label(self) -> &'static str {
        match self {
            UnitTag::Gram => "g",
            UnitTag::Ounce => "oz",
            UnitTag::Pound => "lbs",
            UnitTag::Milliliter => "ml",
            UnitTag::FluidOunce => "floz",
            UnitTag::KiloCalorie => "kcal",
        }
    }

    /// 대소문자를 무시하고 흔한 별칭까지 받아들인다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" => Some(UnitTag::Gram),
            "oz" | "ounce" | "ounces" => Some(UnitTag::Ounce),
            "lb" | "lbs" | "pound" | "pounds" => Some(UnitTag::Pound),
            "ml" | "milliliter" | "millilitre" => Some(UnitTag::Milliliter),
            "floz" | "fl oz" | "fl.oz" | "fl_oz" => Some(UnitTag::FluidOunce),
            "kcal" | "kilocalorie" | "cal" => Some(UnitTag::KiloCalorie),
            _ => None,
        }
    }
}

impl fmt::Display for UnitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 알 수 없는 단위 문자열.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownUnit(pub String);

impl fmt::Display for UnknownUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown unit: {}", self.0)
    }
}

impl std::error::Error for UnknownUnit {}

impl FromStr for UnitTag {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitTag::parse(s).ok_or_else(|| UnknownUnit(s.to_string()))
    }
}
