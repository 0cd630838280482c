use serde::{Deserialize, Serialize};

use crate::conversion::ConversionError;
use crate::quantity::QuantityKind;

/// 밀도 단위. 계산 결과는 항상 kg/m³ 로 제공하며, 나머지 단위는 식별만 한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DensityUnit {
    #[serde(rename = "kg/m3")]
    KgPerM3,
    #[serde(rename = "g/cm3")]
    GPerCm3,
    #[serde(rename = "lb/ft3")]
    LbPerFt3,
}

impl DensityUnit {
    pub const ALL: [DensityUnit; 3] = [
        DensityUnit::KgPerM3,
        DensityUnit::GPerCm3,
        DensityUnit::LbPerFt3,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            DensityUnit::KgPerM3 => "kg/m3",
            DensityUnit::GPerCm3 => "g/cm3",
            DensityUnit::LbPerFt3 => "lb/ft3",
        }
    }
}

/// 밀도 변환. 같은 단위끼리는 값을 그대로 돌려주고, 그 외에는 지원하지 않는다.
pub fn convert_density(
    value: f64,
    from: DensityUnit,
    to: DensityUnit,
) -> Result<f64, ConversionError> {
    if from == to {
        return Ok(value);
    }
    Err(ConversionError::NotImplemented {
        quantity: QuantityKind::Density,
        from: from.tag().to_string(),
        to: to.tag().to_string(),
    })
}
